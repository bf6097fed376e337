//! Application services - orchestrate use cases.
//!
//! `GenerateService` sequences a run; `TemplateValidator` and `OutputWriter`
//! are the steps it delegates to.

pub mod generate_service;
pub mod output_writer;
pub mod template_validator;

pub use generate_service::{GenerateService, GenerationReport, GenerationStage, RenderedResource};
pub use output_writer::OutputWriter;
pub use template_validator::TemplateValidator;
