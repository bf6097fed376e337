//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `resgen-adapters` implement these.
//!
//! All ports here are driven (output) ports:
//!   - `Filesystem`: template probing and resource writing
//!   - `TemplateRenderer`: the template engine
//!   - `EnvironmentProvider`: process environment variables

pub mod output;

pub use output::{EnvironmentProvider, Filesystem, TemplateRenderer};

#[cfg(test)]
pub use output::{MockEnvironmentProvider, MockFilesystem, MockTemplateRenderer};
