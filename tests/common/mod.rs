//! Common test utilities for web-icons CLI tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated project directory plus helpers to run the binary
//! - Assertion macros: `assert_generated!`, `assert_output_contains!`
//! - Fixtures: source icon images and the expected asset names

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
