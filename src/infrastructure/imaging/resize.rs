//! Raster resizing with the `image` crate

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::domain::ports::ImageResizer;
use crate::domain::services::fit_within;
use crate::error::GenerateResult;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Resizer backed by the `image` crate
#[derive(Debug, Clone, Copy)]
pub struct ImageCrateResizer {
    filter: FilterType,
}

impl ImageCrateResizer {
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }

    /// Scale `img` into a transparent `size`x`size` canvas.
    pub fn fit_onto_canvas(&self, img: &DynamicImage, size: u32) -> RgbaImage {
        let placement = fit_within(img.width(), img.height(), size);
        let mut canvas = RgbaImage::from_pixel(size, size, TRANSPARENT);
        if placement.width == 0 || placement.height == 0 {
            return canvas;
        }

        let scaled = imageops::resize(
            &img.to_rgba8(),
            placement.width,
            placement.height,
            self.filter,
        );
        imageops::replace(&mut canvas, &scaled, placement.x as i64, placement.y as i64);
        canvas
    }
}

impl Default for ImageCrateResizer {
    fn default() -> Self {
        Self::new(FilterType::Lanczos3)
    }
}

impl ImageResizer for ImageCrateResizer {
    fn resize_png(&self, source: &[u8], size: u32) -> GenerateResult<Vec<u8>> {
        let img = image::load_from_memory(source)?;
        encode_png(&self.fit_onto_canvas(&img, size))
    }
}

/// Encode an RGBA buffer as PNG
pub fn encode_png(img: &RgbaImage) -> GenerateResult<Vec<u8>> {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}
