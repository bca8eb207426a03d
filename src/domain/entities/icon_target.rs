//! Icon target entity

/// A square raster icon produced from the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    /// Edge length in pixels
    pub size: u32,
    /// File name inside the image output directory
    pub file_name: &'static str,
    /// What the platform uses this icon for
    pub purpose: &'static str,
}

impl IconTarget {
    pub const fn new(size: u32, file_name: &'static str, purpose: &'static str) -> Self {
        Self {
            size,
            file_name,
            purpose,
        }
    }

    /// `WxH` form used in logs and manifest `sizes` fields.
    pub fn dimensions(&self) -> String {
        format!("{0}x{0}", self.size)
    }
}
