//! `#rrggbb` encoding and decoding, and the round-half-up helper behind it.

use crate::color::RgbColor;
use crate::error::ColorError;

/// Round `val` at `places` decimal places, going up when the fractional
/// part is at least `round_on`.
///
/// ```text
/// digit = val × 10^places
/// out   = (fract(digit) >= round_on ? ceil(digit) : floor(digit)) / 10^places
/// ```
///
/// `fract` keeps the sign of `val`, so negative values always take the
/// floor branch for any positive `round_on`.
pub fn round_half_up(val: f64, round_on: f64, places: i32) -> f64 {
    let pow = 10_f64.powi(places);
    let digit = pow * val;
    let rounded = if digit.fract() >= round_on {
        digit.ceil()
    } else {
        digit.floor()
    };
    rounded / pow
}

fn channel_to_u8(v: f64) -> u8 {
    // NaN saturates to 0 in the cast.
    round_half_up(v * 255.0, 0.5, 0).clamp(0.0, 255.0) as u8
}

/// Encode an RGB color as lowercase `#rrggbb`.
///
/// Channels are scaled by 255 and rounded half up. Anything outside
/// `[0, 1]` saturates to `00` or `ff`.
pub fn rgb_to_hex(c: RgbColor) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        channel_to_u8(c.r),
        channel_to_u8(c.g),
        channel_to_u8(c.b)
    )
}

/// Parse `#rrggbb`, `rrggbb`, `#rgb`, or `rgb` into normalized channels.
pub fn parse_hex(s: &str) -> Result<RgbColor, ColorError> {
    let invalid = || ColorError::InvalidHex(s.to_string());

    let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let [r, g, b] = match digits.len() {
        6 => {
            let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
            [(value >> 16) & 0xff, (value >> 8) & 0xff, value & 0xff]
        }
        3 => {
            let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
            // #abc expands to #aabbcc
            [(value >> 8) & 0xf, (value >> 4) & 0xf, value & 0xf].map(|n| n * 0x11)
        }
        _ => return Err(invalid()),
    };

    Ok(RgbColor::new(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    ))
}
