//! Core domain layer for resgen.
//!
//! Pure logic only: no filesystem, no process environment. All I/O is
//! handled through the ports defined in the application layer.
//!
//! - **PropertyResolver**: explicit properties + environment → `RenderContext`
//! - **OutputPathResolver**: output location + build base → absolute path
//! - **Configuration**: the immutable parameters of one invocation

pub mod entities;
pub mod error;
pub mod output_path;
pub mod property_resolver;
pub mod value_objects;

pub use entities::{
    configuration::{Configuration, ConfigurationBuilder, ExplicitProperties},
    render_context::{LIST_SEPARATOR, PropertySource, PropertyValue, RenderContext},
};

pub use error::DomainError;

pub use output_path::{GENERATED_RESOURCES_DIR, OutputPathResolver};
pub use property_resolver::PropertyResolver;
pub use value_objects::{Charset, TemplateMode, Unencodable};
