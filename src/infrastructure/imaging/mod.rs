//! Image Codec Implementations
//!
//! Concrete implementations of the `ImageResizer` and `IcoEncoder` ports,
//! backed by the `image` and `ico` crates.

mod container;
mod resize;

pub use container::IcoCrateEncoder;
pub use resize::{encode_png, ImageCrateResizer};
