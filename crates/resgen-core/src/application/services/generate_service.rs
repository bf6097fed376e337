//! Generate Service - main application orchestrator.
//!
//! This service sequences one generation run:
//! 1. Validate the template source
//! 2. Resolve properties (explicit + environment)
//! 3. Render through the template engine port
//! 4. Resolve the output path
//! 5. Write the resource
//!
//! Data flows strictly forward; any failure aborts the run and is returned
//! as a single [`GenerateError`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError, OutputWriter, TemplateValidator,
        ports::{EnvironmentProvider, Filesystem, TemplateRenderer},
    },
    domain::{
        Configuration, OutputPathResolver, PropertyResolver, PropertySource, RenderContext,
        TemplateMode,
    },
    error::{GenerateError, GenerateResult},
};

/// Progress of one run.
///
/// Transitions only move forward; `Failed` is terminal and reachable from any
/// non-terminal stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationStage {
    Idle,
    Validated,
    ContextBuilt,
    Rendered,
    Written,
    Done,
    Failed,
}

impl GenerationStage {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Validated => "validated",
            Self::ContextBuilt => "context-built",
            Self::Rendered => "rendered",
            Self::Written => "written",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Forward-only stage tracker for a single run.
#[derive(Debug)]
struct StageTracker {
    current: GenerationStage,
}

impl StageTracker {
    fn new() -> Self {
        Self {
            current: GenerationStage::Idle,
        }
    }

    fn advance(&mut self, next: GenerationStage) {
        debug_assert!(
            !self.current.is_terminal() && next > self.current,
            "illegal stage transition {} -> {}",
            self.current,
            next
        );
        tracing::debug!(from = %self.current, to = %next, "Stage transition");
        self.current = next;
    }

    /// Record a failure, keeping the stage it happened after.
    fn fail(&mut self, err: GenerateError) -> GenerateError {
        warn!(after = %self.current, error = %err, "Generation failed");
        self.current = GenerationStage::Failed;
        err
    }
}

/// Rendered content and its destination, before anything is written.
#[derive(Debug, Clone)]
pub struct RenderedResource {
    pub output_path: PathBuf,
    pub content: String,
    pub context: RenderContext,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub run_id: Uuid,
    pub template: PathBuf,
    pub output_path: PathBuf,
    pub mode: TemplateMode,
    pub charset: String,
    pub bytes_written: usize,
    pub explicit_properties: usize,
    pub environment_properties: usize,
    pub generated_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub stage: GenerationStage,
}

/// Main generation service.
pub struct GenerateService {
    renderer: Box<dyn TemplateRenderer>,
    environment: Box<dyn EnvironmentProvider>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        environment: Box<dyn EnvironmentProvider>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            renderer,
            environment,
            filesystem,
        }
    }

    /// Run the whole pipeline and write the resource.
    ///
    /// `base` is the build output directory relative outputs are placed under.
    #[instrument(
        skip_all,
        fields(
            run_id = tracing::field::Empty,
            template = %config.template().display(),
            output = %config.output().display(),
        )
    )]
    pub fn generate(
        &self,
        config: &Configuration,
        base: impl AsRef<Path>,
    ) -> GenerateResult<GenerationReport> {
        let run_id = Uuid::new_v4();
        tracing::Span::current().record("run_id", tracing::field::display(run_id));
        info!("Starting resource generation");

        let started = Instant::now();
        let mut stages = StageTracker::new();

        let rendered = self.render_stages(config, base.as_ref(), &mut stages)?;

        let bytes_written = OutputWriter::write(
            self.filesystem.as_ref(),
            &rendered.output_path,
            &rendered.content,
            config.charset(),
        )
        .map_err(|e| stages.fail(e.into()))?;
        stages.advance(GenerationStage::Written);

        stages.advance(GenerationStage::Done);
        info!("Generation complete");

        Ok(GenerationReport {
            run_id,
            template: config.template().to_path_buf(),
            output_path: rendered.output_path,
            mode: config.mode(),
            charset: config.charset().label().to_string(),
            bytes_written,
            explicit_properties: rendered.context.count_from(PropertySource::Explicit),
            environment_properties: rendered.context.count_from(PropertySource::Environment),
            generated_at: Utc::now(),
            duration_ms: whole_millis(started.elapsed()),
            stage: stages.current,
        })
    }

    /// Validate, resolve and render without writing anything.
    #[instrument(skip_all, fields(template = %config.template().display()))]
    pub fn render(
        &self,
        config: &Configuration,
        base: impl AsRef<Path>,
    ) -> GenerateResult<RenderedResource> {
        let mut stages = StageTracker::new();
        self.render_stages(config, base.as_ref(), &mut stages)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn render_stages(
        &self,
        config: &Configuration,
        base: &Path,
        stages: &mut StageTracker,
    ) -> GenerateResult<RenderedResource> {
        // 1. Validate template
        TemplateValidator::validate(self.filesystem.as_ref(), config.template())
            .map_err(|e| stages.fail(e.into()))?;
        stages.advance(GenerationStage::Validated);

        // 2. Build render context
        let environment = self.environment.variables();
        let context = PropertyResolver::resolve(config.properties(), &environment)
            .map_err(|e| stages.fail(e.into()))?;
        info!(properties = context.len(), "Render context built");
        stages.advance(GenerationStage::ContextBuilt);

        // 3. Render
        let template_name = config.template_name().ok_or_else(|| {
            stages.fail(
                ApplicationError::TemplateName {
                    path: config.template().to_path_buf(),
                }
                .into(),
            )
        })?;
        let content = self
            .renderer
            .render(
                template_name,
                config.template_dir(),
                config.mode(),
                config.charset(),
                &context,
            )
            .map_err(|e| stages.fail(e.into()))?;
        stages.advance(GenerationStage::Rendered);

        // 4. Resolve output path
        let output_path = OutputPathResolver::resolve(config.output(), base);

        Ok(RenderedResource {
            output_path,
            content,
            context,
        })
    }
}

/// Milliseconds in `elapsed`, saturating at `u64::MAX`.
fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
