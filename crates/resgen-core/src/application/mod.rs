//! Application layer for resgen.
//!
//! This layer contains:
//! - **Services**: the generation pipeline and its steps
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Property and path rules live in `crate::domain`; this layer only
//! sequences them around I/O.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    GenerateService, GenerationReport, GenerationStage, OutputWriter, RenderedResource,
    TemplateValidator,
};

// Re-export port traits (for adapter implementation)
pub use ports::{EnvironmentProvider, Filesystem, TemplateRenderer};

pub use error::{ApplicationError, RenderError, ValidationError};
