//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `resgen-adapters` crate provides implementations.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use crate::application::RenderError;
use crate::domain::{Charset, RenderContext, TemplateMode};

/// Port for filesystem access.
///
/// Implemented by:
/// - `resgen_adapters::filesystem::LocalFilesystem` (production)
/// - `resgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Operations return raw `io::Result`s; the application decides which
/// error taxonomy entry a failure belongs to.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if the file can be opened for reading.
    fn is_readable(&self, path: &Path) -> bool;

    /// Create a directory and all missing ancestors.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create or truncate `path` and write `bytes` to it.
    ///
    /// The file handle must be released on every exit path.
    fn write_file(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// Port for the template engine.
///
/// Implemented by:
/// - `resgen_adapters::renderer::ExpressionRenderer`
///
/// Implementations must read the template from disk on every call; parsed
/// templates are never cached between invocations.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `template_name`, resolved inside `base_directory`.
    fn render(
        &self,
        template_name: &str,
        base_directory: &Path,
        mode: TemplateMode,
        charset: &Charset,
        context: &RenderContext,
    ) -> Result<String, RenderError>;
}

/// Port for the process environment.
///
/// Implemented by:
/// - `resgen_adapters::environment::ProcessEnvironment` (production)
/// - `resgen_adapters::environment::MapEnvironment` (testing, fixed maps)
#[cfg_attr(test, mockall::automock)]
pub trait EnvironmentProvider: Send + Sync {
    /// Snapshot of all variables, taken when called.
    fn variables(&self) -> HashMap<String, String>;
}
