//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the `Configuration`
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `RESGEN_*` environment variables (`__` separates sections, e.g.
//!    `RESGEN_GENERATE__BUILD_DIR`)
//! 3. `--config FILE`, or `./resgen.toml` when present
//! 4. The user configuration file (see [`AppConfig::global_config_path`])
//! 5. Built-in defaults (always present)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "resgen.toml";

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "RESGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `resgen generate`.
    pub generate: GenerateConfig,
    /// Explicit properties applied to every run.
    pub properties: BTreeMap<String, String>,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub build_dir: PathBuf,
    pub mode: String,
    pub encoding: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("target"),
            mode: "text".into(),
            encoding: "UTF-8".into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from every layer.
    ///
    /// An explicit `config_file` must exist; the implicit `./resgen.toml`
    /// and the user file are optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_from(config_file, Self::global_config_path().as_deref())
    }

    fn load_from(config_file: Option<&Path>, global: Option<&Path>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(global) = global {
            builder = builder.add_source(File::from(global).format(FileFormat::Toml).required(false));
        }

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path).format(FileFormat::Toml).required(true)),
            None => builder.add_source(
                File::from(Path::new(LOCAL_CONFIG_FILE))
                    .format(FileFormat::Toml)
                    .required(false),
            ),
        };

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path of the user-level configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "resgen", "resgen")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Path of the configuration file that takes effect for this run.
    pub fn config_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return local;
        }
        Self::global_config_path().unwrap_or(local)
    }

    /// Look up a dotted key (`generate.mode`, `properties.version`, ...).
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "generate.build_dir" => Some(self.generate.build_dir.display().to_string()),
            "generate.mode" => Some(self.generate.mode.clone()),
            "generate.encoding" => Some(self.generate.encoding.clone()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            _ => key
                .strip_prefix("properties.")
                .and_then(|name| self.properties.get(name).cloned()),
        }
    }
}
