//! Implementation of the `resgen generate` command.
//!
//! Responsibility: merge CLI arguments over the loaded configuration, build a
//! core `Configuration`, run the generate service and display the result.
//! No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, instrument};

use resgen_adapters::{ExpressionRenderer, LocalFilesystem, ProcessEnvironment};
use resgen_core::{
    application::GenerateService,
    domain::{Configuration, TemplateMode},
    error::GenerateError,
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `resgen generate` command.
///
/// 1. Merge flags over the configuration file
/// 2. Build and validate the core `Configuration`
/// 3. Render only (`--dry-run`) or run the full pipeline
/// 4. Print the report
#[instrument(skip_all, fields(template = %args.template.display()))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (configuration, build_dir) = build_configuration(&args, &config)?;
    let build_dir = std::path::absolute(&build_dir).with_cli_context(|| {
        format!("Cannot resolve build directory '{}'", build_dir.display())
    })?;

    debug!(
        mode = %configuration.mode(),
        charset = %configuration.charset(),
        build_dir = %build_dir.display(),
        properties = configuration.properties().len(),
        "Configuration resolved"
    );

    let service = GenerateService::new(
        Box::new(ExpressionRenderer::new()),
        Box::new(ProcessEnvironment::new()),
        Box::new(LocalFilesystem::new()),
    );

    if args.dry_run {
        let rendered = service.render(&configuration, &build_dir)?;
        output.dry_run(&rendered)?;
        return Ok(());
    }

    let report = service.generate(&configuration, &build_dir)?;
    output.report(&report)?;

    Ok(())
}

/// Merge CLI flags over the loaded configuration.
///
/// `-D` properties replace same-named `[properties]` entries. Returns the
/// configuration together with the build directory to resolve relative
/// outputs against.
fn build_configuration(
    args: &GenerateArgs,
    config: &AppConfig,
) -> Result<(Configuration, PathBuf), GenerateError> {
    let mode: TemplateMode = args
        .mode
        .as_deref()
        .unwrap_or(&config.generate.mode)
        .parse()?;
    let encoding = args
        .encoding
        .clone()
        .unwrap_or_else(|| config.generate.encoding.clone());

    let mut builder = Configuration::builder()
        .template(&args.template)
        .output(&args.output)
        .mode(mode)
        .encoding(encoding)
        .properties(
            config
                .properties
                .iter()
                .map(|(key, value)| (key.clone(), Some(value.clone()))),
        );

    for prop in &args.properties {
        builder = match &prop.value {
            Some(value) => builder.property(&prop.key, value),
            None => builder.declared_property(&prop.key),
        };
    }

    let build_dir = args
        .build_dir
        .clone()
        .unwrap_or_else(|| config.generate.build_dir.clone());

    Ok((builder.build()?, build_dir))
}
