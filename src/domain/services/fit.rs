//! Fit-within-bounds geometry
//!
//! Scales an image into a square so the longer side touches the bounds,
//! then centres it. The remaining area is left for transparent padding.

/// Where a scaled image lands on a square canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Scaled width in pixels
    pub width: u32,
    /// Scaled height in pixels
    pub height: u32,
    /// Horizontal offset from the canvas' left edge
    pub x: u32,
    /// Vertical offset from the canvas' top edge
    pub y: u32,
}

/// Fit a `width`x`height` image inside a `bound`x`bound` square.
///
/// Images are scaled up as well as down. Each side is at least one pixel
/// unless the input or the bound is empty, in which case nothing is placed.
pub fn fit_within(width: u32, height: u32, bound: u32) -> Placement {
    if width == 0 || height == 0 || bound == 0 {
        return Placement {
            width: 0,
            height: 0,
            x: bound / 2,
            y: bound / 2,
        };
    }

    let (scaled_w, scaled_h) = if width >= height {
        (bound, scale_side(height, width, bound))
    } else {
        (scale_side(width, height, bound), bound)
    };

    Placement {
        width: scaled_w,
        height: scaled_h,
        x: (bound - scaled_w) / 2,
        y: (bound - scaled_h) / 2,
    }
}

/// `short * bound / long`, rounded to nearest, clamped to `1..=bound`.
fn scale_side(short: u32, long: u32, bound: u32) -> u32 {
    let (short, long, bound) = (short as u64, long as u64, bound as u64);
    let scaled = (short * bound + long / 2) / long;
    scaled.clamp(1, bound) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_source_fills_the_square() {
        assert_eq!(
            fit_within(128, 128, 16),
            Placement {
                width: 16,
                height: 16,
                x: 0,
                y: 0
            }
        );
    }

    #[test]
    fn wide_source_is_letterboxed_vertically() {
        let p = fit_within(200, 100, 64);
        assert_eq!((p.width, p.height), (64, 32));
        assert_eq!((p.x, p.y), (0, 16));
    }

    #[test]
    fn tall_source_is_pillarboxed_horizontally() {
        let p = fit_within(100, 300, 180);
        assert_eq!((p.width, p.height), (60, 180));
        assert_eq!((p.x, p.y), (60, 0));
    }

    #[test]
    fn small_source_is_scaled_up() {
        let p = fit_within(16, 16, 1200);
        assert_eq!((p.width, p.height), (1200, 1200));
    }

    #[test]
    fn extreme_aspect_keeps_one_pixel() {
        let p = fit_within(10_000, 1, 16);
        assert_eq!((p.width, p.height), (16, 1));
    }

    #[test]
    fn empty_input_places_nothing() {
        let p = fit_within(0, 10, 16);
        assert_eq!((p.width, p.height), (0, 0));
    }
}
