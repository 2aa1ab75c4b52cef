//! Linear interpolation in RGB and HSL space.
//!
//! ```text
//! out = a + factor × (b − a)
//! ```
//!
//! `factor` is not clamped, so values outside `[0, 1]` extrapolate. The
//! endpoints are exact: `factor == 0` returns `a` and `factor == 1` returns
//! `b` bit-for-bit.

use crate::color::{HslColor, RgbColor};

#[inline]
fn lerp(a: f64, b: f64, factor: f64) -> f64 {
    // a + (b − a) can be one ulp away from b.
    if factor == 1.0 {
        return b;
    }
    a + factor * (b - a)
}

/// Interpolate channel-wise between two RGB colors.
pub fn interpolate_rgb(c1: RgbColor, c2: RgbColor, factor: f64) -> RgbColor {
    RgbColor::new(
        lerp(c1.r, c2.r, factor),
        lerp(c1.g, c2.g, factor),
        lerp(c1.b, c2.b, factor),
    )
}

/// Interpolate component-wise between two HSL colors.
///
/// Hue is blended linearly like the other components; it does not take the
/// shorter way around the hue circle.
pub fn interpolate_hsl(h1: HslColor, h2: HslColor, factor: f64) -> HslColor {
    HslColor(std::array::from_fn(|i| lerp(h1[i], h2[i], factor)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_rgb_endpoints_are_exact() {
        let a = RgbColor::new(0.1, 0.7, 0.3);
        let b = RgbColor::new(0.9, 0.2, 0.6);
        assert_eq!(interpolate_rgb(a, b, 0.0), a);
        assert_eq!(interpolate_rgb(a, b, 1.0), b);
    }

    #[test]
    fn test_rgb_midpoint() {
        let result = interpolate_rgb(RgbColor::BLACK, RgbColor::new(1.0, 0.5, 0.25), 0.5);
        assert_eq!(result, RgbColor::new(0.5, 0.25, 0.125));
    }

    #[test]
    fn test_rgb_factor_is_not_clamped() {
        let result = interpolate_rgb(RgbColor::gray(0.2), RgbColor::gray(0.4), 2.0);
        assert!((result.r - 0.6).abs() < EPSILON);
        let result = interpolate_rgb(RgbColor::gray(0.2), RgbColor::gray(0.4), -1.0);
        assert!(result.g.abs() < EPSILON);
    }

    #[test]
    fn test_hsl_endpoints_are_exact() {
        let a = HslColor::new(0.1, 0.9, 0.3);
        let b = HslColor::new(0.6, 0.2, 0.8);
        assert_eq!(interpolate_hsl(a, b, 0.0), a);
        assert_eq!(interpolate_hsl(a, b, 1.0), b);
    }

    #[test]
    fn test_hsl_moves_toward_second_color() {
        let a = HslColor::new(0.2, 0.4, 0.4);
        let b = HslColor::new(0.6, 0.8, 0.6);
        let mid = interpolate_hsl(a, b, 0.5);
        let expected = [0.4, 0.6, 0.5];
        for i in 0..3 {
            assert!(
                (mid[i] - expected[i]).abs() < EPSILON,
                "component {i}: {:.12} vs {:.12}",
                mid[i],
                expected[i]
            );
        }
    }
}
