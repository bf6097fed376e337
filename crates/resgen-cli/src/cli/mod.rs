//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "resgen",
    bin_name = "resgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Build-time resource generator",
    long_about = "resgen renders a template with explicit properties and \
                  environment variables and writes the result under the \
                  build directory's generated-resources folder.",
    after_help = "EXAMPLES:\n\
        \x20 resgen generate -t src/templates/version.txt -o version.txt -D version=1.2.0\n\
        \x20 resgen generate -t index.html -o web/index.html --mode html --dry-run\n\
        \x20 resgen config list\n\
        \x20 resgen completions bash > /usr/share/bash-completion/completions/resgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a template and write the generated resource.
    #[command(
        visible_alias = "gen",
        about = "Generate a resource from a template",
        after_help = "EXAMPLES:\n\
            \x20 resgen generate -t hello.txt -o hello.txt -D name=World\n\
            \x20 resgen generate -t app.js -o js/app.js -m javascript -D colors=red,green\n\
            \x20 resgen generate -t hello.txt -o /tmp/hello.txt --encoding ISO-8859-1"
    )]
    Generate(GenerateArgs),

    /// Initialise a resgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 resgen init           # ./resgen.toml\n\
            \x20 resgen init --global  # user configuration directory\n\
            \x20 resgen init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 resgen completions bash > ~/.local/share/bash-completion/completions/resgen\n\
            \x20 resgen completions zsh  > ~/.zfunc/_resgen\n\
            \x20 resgen completions fish > ~/.config/fish/completions/resgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 resgen config get generate.build_dir\n\
            \x20 resgen config get properties.version\n\
            \x20 resgen config list"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `resgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Template file to render.
    #[arg(
        short = 't',
        long = "template",
        value_name = "FILE",
        help = "Template file to render"
    )]
    pub template: PathBuf,

    /// Output location. Relative paths land under
    /// `<build-dir>/generated-resources/`.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path (relative paths go under <build-dir>/generated-resources)"
    )]
    pub output: PathBuf,

    /// Explicit property. Values containing `,` become lists.
    #[arg(
        short = 'D',
        long = "property",
        value_name = "KEY[=VALUE]",
        value_parser = parse_property,
        help = "Explicit property; overrides environment variables"
    )]
    pub properties: Vec<PropertyArg>,

    /// Template mode (html, xml, text, javascript, css, raw).
    #[arg(
        short = 'm',
        long = "mode",
        value_name = "MODE",
        help = "Template mode [default: text]"
    )]
    pub mode: Option<String>,

    /// Charset for reading the template and writing the resource.
    #[arg(
        short = 'e',
        long = "encoding",
        value_name = "CHARSET",
        help = "Output encoding [default: UTF-8]"
    )]
    pub encoding: Option<String>,

    /// Build output directory.
    #[arg(
        short = 'b',
        long = "build-dir",
        value_name = "DIR",
        help = "Build directory [default: target]"
    )]
    pub build_dir: Option<PathBuf>,

    /// Render and print without writing anything.
    #[arg(long = "dry-run", help = "Print the rendered resource instead of writing it")]
    pub dry_run: bool,
}

/// A `-D KEY[=VALUE]` occurrence.
///
/// A bare `KEY` declares the property without a value, which generation
/// rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyArg {
    pub key: String,
    pub value: Option<String>,
}

fn parse_property(raw: &str) -> Result<PropertyArg, String> {
    let (key, value) = match raw.split_once('=') {
        Some((key, value)) => (key, Some(value.to_string())),
        None => (raw, None),
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("property '{raw}' has an empty key"));
    }

    Ok(PropertyArg {
        key: key.to_string(),
        value,
    })
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `resgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the user configuration directory instead of `./resgen.toml`.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `resgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `resgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generate.mode` or `properties.version`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
