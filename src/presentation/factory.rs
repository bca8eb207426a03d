//! Use Case Factory
//!
//! Creates the generate use case with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{Capabilities, GenerateUseCase};
use crate::config::GeneratorConfig;
use crate::infrastructure::{IcoCrateEncoder, ImageCrateResizer, LocalFs};

/// Capabilities listed in `--help`
pub const REQUIRED_CAPABILITIES: &[&str] = &[
    "image resizer  (image crate: decode, Lanczos3 resize, PNG encode)",
    "ICO encoder    (ico crate: multi-resolution favicon.ico)",
];

/// Type alias for the concrete GenerateUseCase with all dependencies
pub type ConcreteGenerateUseCase = GenerateUseCase<LocalFs>;

/// The codecs compiled into this binary
pub fn builtin_capabilities() -> Capabilities {
    Capabilities::new(
        Arc::new(ImageCrateResizer::default()),
        Arc::new(IcoCrateEncoder),
    )
}

/// Create a generate use case with all dependencies wired up
pub fn create_generate_use_case(config: GeneratorConfig) -> ConcreteGenerateUseCase {
    GenerateUseCase::new(LocalFs::new(), builtin_capabilities(), config)
}
