//! Easing curves mapping linear progress in `[0, 1]` onto eased progress.

/// An injectable easing curve.
pub type Easing = fn(f64) -> f64;

/// Symmetric acceleration then deceleration.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Fast start, slow finish.
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

#[cfg(test)]
pub fn linear(t: f64) -> f64 {
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CURVES: [(&str, Easing); 3] = [
        ("ease_in_out_cubic", ease_in_out_cubic),
        ("ease_out_quart", ease_out_quart),
        ("linear", linear),
    ];

    #[test]
    fn curves_pin_both_endpoints() {
        for (name, curve) in CURVES {
            assert!(curve(0.0).abs() < 1e-12, "{name}(0) = {}", curve(0.0));
            assert!((curve(1.0) - 1.0).abs() < 1e-12, "{name}(1) = {}", curve(1.0));
        }
    }

    #[test]
    fn cubic_is_symmetric_around_midpoint() {
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
        for t in [0.1, 0.2, 0.3, 0.45] {
            let sum = ease_in_out_cubic(t) + ease_in_out_cubic(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-12, "t = {t}");
        }
    }

    #[test]
    fn quart_front_loads_progress() {
        assert!(ease_out_quart(0.25) > 0.25);
        assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn curves_stay_in_unit_range(t in 0.0f64..=1.0) {
            for (_, curve) in CURVES {
                let v = curve(t);
                prop_assert!((-1e-12..=1.0 + 1e-12).contains(&v));
            }
        }

        #[test]
        fn curves_never_decrease(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for (_, curve) in CURVES {
                prop_assert!(curve(lo) <= curve(hi) + 1e-12);
            }
        }
    }
}
