//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O and codec work.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations
//! - `imaging/` - Resizer and ICO encoder backed by `image` / `ico`

pub mod fs;
pub mod imaging;

// Re-export for convenience
pub use fs::LocalFs;
pub use imaging::{IcoCrateEncoder, ImageCrateResizer};
