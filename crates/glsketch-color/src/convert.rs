//! RGB ↔ HSL conversion.
//!
//! Both directions use the hexcone model with every component in `[0, 1]`.
//! Inputs are assumed, not checked, to be in range; out-of-range channels
//! produce hue/saturation values outside `[0, 1]` rather than an error.
//!
//! # Algorithm
//! ```text
//! l = (max + min) / 2
//! s = d / (max + min)        if l <= 0.5
//!   = d / (2 − max − min)    otherwise,   where d = max − min
//! h = sector(max) / 6
//! ```

use crate::color::{HslColor, RgbColor};

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const ONE_HALF: f64 = 1.0 / 2.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Convert RGB to HSL.
///
/// Achromatic colors (`max == min`) get hue 0 and saturation 0.
/// When several channels tie for the maximum, red wins over green and
/// green over blue.
pub fn rgb_to_hsl(c: RgbColor) -> HslColor {
    let RgbColor { r, g, b } = c;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return HslColor::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l <= 0.5 {
        d / (max + min)
    } else {
        d / (2.0 - max - min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    HslColor::new(h / 6.0, s, l)
}

/// Convert HSL to RGB.
///
/// Zero saturation yields the gray `(l, l, l)`.
pub fn hsl_to_rgb(hsl: HslColor) -> RgbColor {
    let [h, s, l] = hsl.0;

    if s == 0.0 {
        return RgbColor::gray(l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    RgbColor::new(
        hue_to_channel(p, q, h + ONE_THIRD),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - ONE_THIRD),
    )
}

/// Evaluate one RGB channel from the HSL intermediates `p`, `q` at hue
/// position `t`.
///
/// `t` is wrapped by at most one turn in either direction, so it should lie
/// within `[-1, 2]`.
pub fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < ONE_SIXTH {
        p + (q - p) * 6.0 * t
    } else if t < ONE_HALF {
        q
    } else if t < TWO_THIRDS {
        p + (q - p) * (TWO_THIRDS - t) * 6.0
    } else {
        p
    }
}
