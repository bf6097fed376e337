// ============================================================================
// domain/error.rs - CONFIGURATION ERRORS
// ============================================================================

use thiserror::Error;

/// Errors raised while building or resolving the invocation configuration.
///
/// Everything here is a configuration problem: the build step was invoked
/// with parameters that cannot produce a resource.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Property '{key}' is declared without a value")]
    MissingPropertyValue { key: String },

    #[error("Property name must not be empty")]
    EmptyPropertyKey,

    #[error("Unknown template mode '{value}'")]
    UnknownTemplateMode { value: String },

    #[error("Unsupported character encoding '{label}'")]
    UnknownCharset { label: String },

    #[error("Required parameter missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingPropertyValue { key } => vec![
                format!("Give '{key}' a value, e.g. -D {key}=value"),
                "Remove the declaration to fall back to the environment".into(),
            ],
            Self::EmptyPropertyKey => vec!["Properties are written as KEY=VALUE".into()],
            Self::UnknownTemplateMode { .. } => vec![
                "Supported modes: html, xml, text, javascript, css, raw".into(),
            ],
            Self::UnknownCharset { .. } => vec![
                "Use a WHATWG encoding label such as UTF-8, UTF-16LE or windows-1252".into(),
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("Pass the '{field}' parameter explicitly")]
            }
        }
    }
}
