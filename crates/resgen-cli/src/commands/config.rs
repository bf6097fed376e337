//! `resgen config` — inspect the effective configuration.

use std::path::Path;

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&Path>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key).ok_or_else(|| CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            })?;
            output.emit(&value)?;
        }

        ConfigCommands::List => {
            if output.format() == OutputFormat::Json {
                let json = serde_json::to_string_pretty(&config)
                    .map_err(std::io::Error::other)
                    .with_cli_context(|| "Failed to serialise config")?;
                output.emit(&json)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised = toml::to_string_pretty(&config)
                    .with_cli_context(|| "Failed to serialise config")?;
                output.emit(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            output.emit(&AppConfig::config_path(config_file).display().to_string())?;
        }
    }

    Ok(())
}
