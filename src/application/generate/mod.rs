//! Generate Module
//!
//! Orchestrates the icon generation flow.
//!
//! ## Structure
//!
//! - `options` - Run options (`GenerateOptions`)
//! - `use_case` - Core use case logic (`GenerateUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use web_icons::application::{Capabilities, GenerateOptions, GenerateUseCase};
//!
//! let use_case = GenerateUseCase::new(fs, capabilities, config);
//! let report = use_case.execute(&GenerateOptions::default())?;
//! ```

mod options;
mod use_case;

pub use options::GenerateOptions;
pub use use_case::GenerateUseCase;
