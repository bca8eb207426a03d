//! Property tests for fit-within-bounds placement.

use proptest::prelude::*;

use web_icons::domain::services::fit_within;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the scaled image always lies inside the canvas.
    #[test]
    fn property_placement_stays_in_bounds(
        w in 1u32..5000,
        h in 1u32..5000,
        bound in 1u32..2048,
    ) {
        let p = fit_within(w, h, bound);
        prop_assert!(p.width >= 1 && p.height >= 1);
        prop_assert!(p.x + p.width <= bound);
        prop_assert!(p.y + p.height <= bound);
    }

    /// PROPERTY: the longer side touches the bounds.
    #[test]
    fn property_longer_side_fills_bound(
        w in 1u32..5000,
        h in 1u32..5000,
        bound in 1u32..2048,
    ) {
        let p = fit_within(w, h, bound);
        prop_assert_eq!(p.width.max(p.height), bound);
    }

    /// PROPERTY: padding is split evenly, the extra pixel going right/bottom.
    #[test]
    fn property_placement_is_centred(
        w in 1u32..5000,
        h in 1u32..5000,
        bound in 1u32..2048,
    ) {
        let p = fit_within(w, h, bound);
        let right = bound - p.x - p.width;
        let bottom = bound - p.y - p.height;
        prop_assert!(right == p.x || right == p.x + 1);
        prop_assert!(bottom == p.y || bottom == p.y + 1);
    }

    /// PROPERTY: aspect ratio survives up to rounding of the shorter side.
    #[test]
    fn property_aspect_ratio_is_preserved(
        w in 1u32..5000,
        h in 1u32..5000,
        bound in 1u32..2048,
    ) {
        let p = fit_within(w, h, bound);
        let (long, short) = (w.max(h) as f64, w.min(h) as f64);
        let exact = short * bound as f64 / long;
        let scaled_short = p.width.min(p.height) as f64;
        prop_assert!((scaled_short - exact.max(1.0)).abs() <= 0.5 + f64::EPSILON);
    }
}
