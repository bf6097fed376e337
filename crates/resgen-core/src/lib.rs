//! Resgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the resgen
//! build-time resource generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           resgen-cli (CLI)              │
//! │     (Builds Configuration, reports)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerateService, TemplateValidator,   │
//! │   OutputWriter)                         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Renderer, Environment, Filesystem)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     resgen-adapters (Infrastructure)    │
//! │ (ExpressionRenderer, LocalFilesystem,   │
//! │  ProcessEnvironment, ...)               │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (PropertyResolver, OutputPathResolver,  │
//! │  Configuration, RenderContext)          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use resgen_core::prelude::*;
//!
//! let config = Configuration::builder()
//!     .template("src/templates/version.txt")
//!     .output("version.txt")
//!     .property("name", "World")
//!     .build()
//!     .unwrap();
//!
//! // Adapters come from `resgen-adapters`.
//! let service = GenerateService::new(renderer, environment, filesystem);
//! let report = service.generate(&config, "/work/target").unwrap();
//! println!("{}", report.output_path.display());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, GenerationReport, GenerationStage, OutputWriter, RenderedResource,
        TemplateValidator,
        ports::{EnvironmentProvider, Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        Charset, Configuration, ConfigurationBuilder, OutputPathResolver, PropertyResolver,
        PropertyValue, RenderContext, TemplateMode,
    };
    pub use crate::error::{ErrorCategory, GenerateError, GenerateResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
