//! Application layer errors.
//!
//! These errors represent failures while validating, rendering and writing.
//! Configuration problems are `DomainError` from `crate::domain`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::TemplateMode;
use crate::error::ErrorCategory;

/// The template source is not usable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Template file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Template path is not a file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("Cannot read template file: {}", path.display())]
    NotReadable { path: PathBuf },
}

/// The template engine could not produce output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Syntax error in '{template}' at line {line}: {message}")]
    Syntax {
        template: String,
        line: usize,
        message: String,
    },

    #[error("Unresolved reference '{name}' in '{template}' at line {line}")]
    UnresolvedReference {
        template: String,
        name: String,
        line: usize,
    },

    #[error("'{construct}' is not supported in {mode} mode ('{template}', line {line})")]
    UnsupportedConstruct {
        template: String,
        mode: TemplateMode,
        construct: String,
        line: usize,
    },

    #[error("Cannot load template {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Template {} is not valid {charset}", path.display())]
    Decoding { path: PathBuf, charset: String },
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to render template: {0}")]
    Rendering(#[from] RenderError),

    #[error("Failed to create output directory: {}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write generated resource: {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Generated content is not representable in {charset}: {}", path.display())]
    Unencodable { path: PathBuf, charset: String },

    /// The template path has no usable file name.
    #[error("Template path has no file name: {}", path.display())]
    TemplateName { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation(ValidationError::NotFound { path }) => vec![
                format!("Check the template path: {}", path.display()),
                "Relative template paths are resolved against the working directory".into(),
            ],
            Self::Validation(ValidationError::NotAFile { path }) => vec![format!(
                "{} is a directory; point --template at a file inside it",
                path.display()
            )],
            Self::Validation(ValidationError::NotReadable { path }) => {
                vec![format!("Check read permissions on {}", path.display())]
            }
            Self::Rendering(RenderError::UnresolvedReference { name, .. }) => vec![
                format!("Define it with -D {name}=value or export {name}"),
                format!("Or give it a fallback: ${{{name} ?: default}}"),
            ],
            Self::Rendering(RenderError::Decoding { charset, .. }) => vec![format!(
                "The template is not {charset}; pass the right --encoding"
            )],
            Self::Rendering(_) => vec!["Fix the template and run the build again".into()],
            Self::DirectoryCreation { path, .. } => vec![
                format!("Failed to create: {}", path.display()),
                "Check that no path component is an existing file".into(),
                "Check that you have write permissions".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("The file at {} may be incomplete", path.display()),
                "Check available disk space and permissions".into(),
            ],
            Self::Unencodable { .. } => vec![
                "Choose an encoding that covers every character, e.g. UTF-8".into(),
            ],
            Self::TemplateName { .. } => vec!["Pass a path to a template file".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) | Self::TemplateName { .. } => ErrorCategory::Validation,
            Self::Rendering(_) => ErrorCategory::Render,
            Self::DirectoryCreation { .. } => ErrorCategory::DirectoryCreation,
            Self::WriteFailed { .. } | Self::Unencodable { .. } => ErrorCategory::Write,
        }
    }
}
