use glam::Vec3;

/// Saturation used for every exterior escape-time colour.
pub const ESCAPE_SATURATION: f32 = 0.8;
/// Value used for every exterior escape-time colour.
pub const ESCAPE_VALUE: f32 = 1.0;

/// Convert an HSV triple to RGB.
///
/// `h` is in degrees and may lie anywhere on the real line; it is wrapped into
/// `[0, 360)` before the sector lookup. `v` is clamped to at most 1.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Vec3 {
    let v = v.min(1.0);
    let h = normalize_hue(h);
    let hp = h / 60.0;
    let c = v * s;
    let x = c * (1.0 - ((hp % 2.0) - 1.0).abs());

    // NaN or infinite hue falls through every sector and stays achromatic
    let rgb = if (0.0..1.0).contains(&hp) {
        Vec3::new(c, x, 0.0)
    } else if (1.0..2.0).contains(&hp) {
        Vec3::new(x, c, 0.0)
    } else if (2.0..3.0).contains(&hp) {
        Vec3::new(0.0, c, x)
    } else if (3.0..4.0).contains(&hp) {
        Vec3::new(0.0, x, c)
    } else if (4.0..5.0).contains(&hp) {
        Vec3::new(x, 0.0, c)
    } else if (5.0..6.0).contains(&hp) {
        Vec3::new(c, 0.0, x)
    } else {
        Vec3::ZERO
    };

    rgb + Vec3::splat(v - c)
}

/// Smooth escape-time colouring.
///
/// `remaining` is the number of iterations left when the orbit escaped.
/// `real` and `imag` are summed before the square root; callers pass their own
/// scaled sample coordinates here, not the orbit's final value.
pub fn escape_to_hue(remaining: u32, real: f32, imag: f32) -> Vec3 {
    let zn = (real + imag).sqrt();
    let hue = remaining as f32 + 1.0 - zn.abs().ln().ln() / 2.0_f32.ln();
    let hue = 0.95 + 20.0 * hue;

    hsv_to_rgb(hue, ESCAPE_SATURATION, ESCAPE_VALUE)
}

/// Wrap a hue into `[0, 360)`. Non-finite input is returned unchanged.
pub fn normalize_hue(h: f32) -> f32 {
    if !h.is_finite() {
        return h;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative input
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb(actual: Vec3, expected: [f32; 3]) {
        for (a, e) in actual.to_array().iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-5, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_hsv_to_rgb_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_hsv_to_rgb_secondaries() {
        assert_rgb(hsv_to_rgb(60.0, 1.0, 1.0), [1.0, 1.0, 0.0]);
        assert_rgb(hsv_to_rgb(180.0, 1.0, 1.0), [0.0, 1.0, 1.0]);
        assert_rgb(hsv_to_rgb(300.0, 1.0, 1.0), [1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_hsv_to_rgb_zero_saturation_is_grey() {
        for h in [0.0, 45.0, 90.0, 200.0, 359.0, 720.5, -30.0] {
            for v in [0.0, 0.25, 0.5, 1.0] {
                assert_eq!(hsv_to_rgb(h, 0.0, v), Vec3::splat(v));
            }
        }
    }

    #[test]
    fn test_hsv_to_rgb_clamps_value() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 3.0), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_hsv_to_rgb_wraps_out_of_range_hue() {
        assert_rgb(hsv_to_rgb(480.0, 1.0, 1.0), hsv_to_rgb(120.0, 1.0, 1.0).to_array());
        assert_rgb(hsv_to_rgb(-120.0, 1.0, 1.0), hsv_to_rgb(240.0, 1.0, 1.0).to_array());
        assert_rgb(hsv_to_rgb(360.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_hsv_to_rgb_huge_hue_terminates() {
        let rgb = hsv_to_rgb(1.0e30, 1.0, 1.0);
        assert!(rgb.to_array().iter().all(|c| (0.0..=1.0).contains(c)));
    }

    #[test]
    fn test_hsv_to_rgb_non_finite_hue_is_achromatic() {
        assert_rgb(hsv_to_rgb(f32::NAN, 0.8, 1.0), [0.2, 0.2, 0.2]);
        assert_rgb(hsv_to_rgb(f32::INFINITY, 0.8, 1.0), [0.2, 0.2, 0.2]);
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert!(normalize_hue(f32::NAN).is_nan());
    }

    #[test]
    fn test_escape_to_hue_stays_in_gamut() {
        for remaining in [1, 2, 7, 50, 500] {
            for real in [5.0, 100.0, 365.0, 725.0] {
                for imag in [-1.0, 0.0, 0.99] {
                    let rgb = escape_to_hue(remaining, real, imag);
                    for c in rgb.to_array() {
                        assert!((0.0..=1.0 + 1e-6).contains(&c), "{:?}", rgb);
                    }
                }
            }
        }
    }

    #[test]
    fn test_escape_to_hue_matches_formula() {
        let remaining = 3;
        let (real, imag) = (365.0_f32, 0.0_f32);
        let zn = (real + imag).sqrt();
        let hue = remaining as f32 + 1.0 - zn.ln().ln() / 2.0_f32.ln();
        let expected = hsv_to_rgb(0.95 + 20.0 * hue, 0.8, 1.0);

        assert_eq!(escape_to_hue(remaining, real, imag), expected);
    }

    #[test]
    fn test_escape_to_hue_never_black() {
        // m = v - c = 0.2 keeps every exterior colour away from interior black
        let rgb = escape_to_hue(10, 400.0, 0.5);
        assert!(rgb.max_element() > 0.0);
        assert!(rgb.min_element() >= 0.2 - 1e-6);
    }
}
