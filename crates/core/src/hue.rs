//! Hue wrapping into canonical degrees.

/// Full turn in degrees.
pub const FULL_TURN: f64 = 360.0;

/// Wraps any hue into [0, 360).
///
/// Uses Euclidean remainder, so `-10` becomes `350`. Tiny negative inputs
/// whose remainder rounds up to exactly 360 collapse to 0. Non-finite input
/// has no meaningful angle and yields 0.
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(FULL_TURN);
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Shortest angular distance between two hues, in [0, 180].
pub fn hue_difference(a: f64, b: f64) -> f64 {
    let d = normalize_hue(a - b);
    d.min(FULL_TURN - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn negative_hue_wraps_forward() {
        assert!(approx_eq(normalize_hue(-10.0), 350.0));
        assert!(approx_eq(normalize_hue(-370.0), 350.0));
    }

    #[test]
    fn hue_above_full_turn_wraps() {
        assert!(approx_eq(normalize_hue(370.0), 10.0));
        assert!(approx_eq(normalize_hue(720.0), 0.0));
    }

    #[test]
    fn canonical_hue_is_unchanged() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(123.456), 123.456);
        assert_eq!(normalize_hue(359.999), 359.999);
    }

    #[test]
    fn exactly_full_turn_maps_to_zero() {
        assert_eq!(normalize_hue(360.0), 0.0);
    }

    #[test]
    fn tiny_negative_hue_never_returns_full_turn() {
        let h = normalize_hue(-1e-20);
        assert!((0.0..FULL_TURN).contains(&h), "got {h}");
    }

    #[test]
    fn non_finite_hue_yields_zero() {
        assert_eq!(normalize_hue(f64::NAN), 0.0);
        assert_eq!(normalize_hue(f64::INFINITY), 0.0);
    }

    #[test]
    fn hue_difference_takes_short_arc() {
        assert!(approx_eq(hue_difference(350.0, 10.0), 20.0));
        assert!(approx_eq(hue_difference(10.0, 350.0), 20.0));
        assert!(approx_eq(hue_difference(370.0, 10.0), 0.0));
        assert!(approx_eq(hue_difference(0.0, 180.0), 180.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn normalized_hue_is_in_canonical_range(h in -1e6_f64..1e6) {
                let n = normalize_hue(h);
                prop_assert!((0.0..FULL_TURN).contains(&n), "normalize_hue({h}) = {n}");
            }

            #[test]
            fn adding_full_turn_does_not_change_normalized_hue(h in -1e4_f64..1e4) {
                let a = normalize_hue(h);
                let b = normalize_hue(h + FULL_TURN);
                prop_assert!(
                    hue_difference(a, b) < 1e-9,
                    "normalize_hue({h}) = {a}, normalize_hue({h} + 360) = {b}"
                );
            }

            #[test]
            fn hue_difference_is_symmetric_and_bounded(a in -720.0_f64..720.0, b in -720.0_f64..720.0) {
                let d = hue_difference(a, b);
                prop_assert!((0.0..=180.0).contains(&d));
                prop_assert!((d - hue_difference(b, a)).abs() < 1e-9);
            }
        }
    }
}
