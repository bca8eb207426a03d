//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the use case with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions and help text
//! - `factory` - Wires the generate use case (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{parse_args, Cli};
pub use factory::{builtin_capabilities, create_generate_use_case, REQUIRED_CAPABILITIES};
