//! Reusable fixtures for web-icons tests.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

pub const SOURCE_ICON: &str = "src/main/resources/assets/icon.png";
pub const OUTPUT_DIR: &str = "docs/static/img";
pub const MANIFEST: &str = "docs/static/site.webmanifest";

/// Every file a fresh run writes into the image directory
pub const IMAGE_ASSETS: &[&str] = &[
    "favicon-16x16.png",
    "favicon-32x32.png",
    "favicon-48x48.png",
    "favicon-64x64.png",
    "apple-touch-icon.png",
    "android-chrome-192x192.png",
    "android-chrome-512x512.png",
    "og-image.png",
    "icon.png",
    "favicon.ico",
];

/// Opaque PNG with a simple gradient so resampling has something to do
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 7 % 256) as u8, (y * 5 % 256) as u8, 120, 255])
    });
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .expect("Failed to encode fixture PNG");
    out
}
