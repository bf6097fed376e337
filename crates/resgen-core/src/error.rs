//! Unified error handling for Resgen Core.
//!
//! This module provides the single wrapping error surfaced to callers. It
//! wraps domain and application errors, keeps the originating cause reachable
//! through [`std::error::Error::source`], and carries user-actionable
//! suggestions.

use thiserror::Error;

use crate::application::{ApplicationError, RenderError, ValidationError};
use crate::domain::DomainError;

/// Root error type for Resgen Core operations.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Configuration problems detected in the domain layer.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Failures while validating, rendering or writing.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Anything else, wrapped with context.
    #[error("Unexpected error: {message}")]
    Unexpected {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<ValidationError> for GenerateError {
    fn from(err: ValidationError) -> Self {
        Self::Application(ApplicationError::Validation(err))
    }
}

impl From<RenderError> for GenerateError {
    fn from(err: RenderError) -> Self {
        Self::Application(ApplicationError::Rendering(err))
    }
}

impl GenerateError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Unexpected { .. } => vec![
                "This appears to be a bug in resgen".into(),
                "Re-run with -vv and include the log when reporting it".into(),
            ],
        }
    }

    /// Which family of the error taxonomy this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Configuration,
            Self::Application(e) => e.category(),
            Self::Unexpected { .. } => ErrorCategory::Unexpected,
        }
    }
}

/// Error taxonomy shared by every layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Render,
    DirectoryCreation,
    Write,
    Unexpected,
}

/// Convenient result type alias.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Wrap the error as [`GenerateError::Unexpected`] with a message.
    fn context(self, msg: impl Into<String>) -> GenerateResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> GenerateResult<T> {
        self.map_err(|e| GenerateError::Unexpected {
            message: msg.into(),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn validation_error_converts_into_validation_category() {
        let err: GenerateError = ValidationError::NotFound {
            path: PathBuf::from("missing.txt"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn domain_error_is_configuration() {
        let err: GenerateError = DomainError::MissingPropertyValue { key: "name".into() }.into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn context_keeps_the_cause() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        let err = result.context("reading clock").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Unexpected);
        assert_eq!(err.source().unwrap().to_string(), "boom");
    }
}
