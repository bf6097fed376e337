//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use resgen_core::application::{GenerationReport, RenderedResource};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

/// JSON shape of a dry run.
#[derive(Serialize)]
struct DryRun<'a> {
    output_path: String,
    content: &'a str,
    properties: usize,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins; when it is `auto` the config file's
    /// `output.format` is consulted before falling back to TTY detection.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
            }
            explicit => explicit,
        };

        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Command payload (rendered content, JSON). Never suppressed.
    pub fn emit(&self, payload: &str) -> io::Result<()> {
        self.term.write_line(payload)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Reports ───────────────────────────────────────────────────────────

    /// Print the outcome of a completed generation.
    pub fn report(&self, report: &GenerationReport) -> io::Result<()> {
        match self.resolved_format {
            OutputFormat::Json => self.emit(&to_json(report)?),
            OutputFormat::Plain => self.print(&format!(
                "{} ({} bytes)",
                report.output_path.display(),
                report.bytes_written
            )),
            OutputFormat::Human | OutputFormat::Auto => {
                self.success(&format!("Generated {}", report.output_path.display()))?;
                self.print(&format!("  Template:   {}", report.template.display()))?;
                self.print(&format!(
                    "  Mode:       {} ({})",
                    report.mode, report.charset
                ))?;
                self.print(&format!("  Size:       {} bytes", report.bytes_written))?;
                self.print(&format!(
                    "  Properties: {} explicit, {} from environment",
                    report.explicit_properties, report.environment_properties
                ))?;
                self.print(&format!("  Took:       {} ms", report.duration_ms))
            }
        }
    }

    /// Print a rendered-but-unwritten resource.
    pub fn dry_run(&self, rendered: &RenderedResource) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            let body = DryRun {
                output_path: rendered.output_path.display().to_string(),
                content: &rendered.content,
                properties: rendered.context.len(),
            };
            return self.emit(&to_json(&body)?);
        }

        self.info(&format!(
            "Dry run: would write {}",
            rendered.output_path.display()
        ))?;
        self.emit(&rendered.content)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

fn to_json<T: Serialize>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(format: OutputFormat, quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(OutputFormat::Plain, true, true);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn human_format_keeps_color_unless_disabled() {
        assert!(!make_manager(OutputFormat::Human, false, false).no_color);
        assert!(make_manager(OutputFormat::Human, false, true).no_color);
    }

    #[test]
    fn machine_formats_never_use_color() {
        assert!(make_manager(OutputFormat::Plain, false, false).no_color);
        assert!(make_manager(OutputFormat::Json, false, false).no_color);
    }

    #[test]
    fn format_accessor_returns_resolved() {
        let out = make_manager(OutputFormat::Plain, false, false);
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let mut config = AppConfig::default();
        config.output.format = "JSON".into();
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Auto,
        };
        assert_eq!(OutputManager::new(&args, &config).format(), OutputFormat::Json);
    }
}
