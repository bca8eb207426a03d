//! Domain Services
//!
//! Stateless computations used by the generator.

mod fit;

pub use fit::{fit_within, Placement};
