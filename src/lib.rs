//! web-icons - web icon asset generator
//!
//! Derives the favicons, touch icons, social preview image, multi-resolution
//! `favicon.ico` and `site.webmanifest` used by the documentation site from
//! a single source icon.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Capabilities, GenerateOptions, GenerateUseCase};
pub use config::{GeneratorConfig, ICON_TARGETS, ICO_SIZES};
pub use domain::entities::{GenerationReport, IconTarget, StepOutcome, StepReport, WebManifest};
pub use error::{GenerateError, GenerateResult};
