pub mod configuration;
pub mod render_context;

pub use crate::domain::DomainError;
pub use configuration::{Configuration, ConfigurationBuilder, ExplicitProperties};
pub use render_context::{PropertySource, PropertyValue, RenderContext};
