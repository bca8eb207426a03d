//! Image codec ports
//!
//! The two external capabilities the generator depends on: a raster resizer
//! and a multi-resolution ICO container encoder.

use crate::error::GenerateResult;

/// Fit-within-bounds resize of an encoded image into a square PNG
pub trait ImageResizer: Send + Sync {
    /// Scale `source` to fit inside `size`x`size` preserving aspect ratio,
    /// pad with full transparency and encode as PNG.
    fn resize_png(&self, source: &[u8], size: u32) -> GenerateResult<Vec<u8>>;
}

/// Multi-resolution icon container encoder
pub trait IcoEncoder: Send + Sync {
    /// Pack PNG buffers into one ICO file; entries keep the input order.
    fn encode(&self, pngs: &[Vec<u8>]) -> GenerateResult<Vec<u8>>;
}
