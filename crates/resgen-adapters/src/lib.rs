//! Infrastructure adapters for resgen.
//!
//! This crate implements the ports defined in `resgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod environment;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use environment::{MapEnvironment, ProcessEnvironment};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::ExpressionRenderer;
