//! glsketch color — the color math behind the sketches.
//!
//! Pure functions over in-memory color values: RGB/HSL conversion, linear
//! interpolation, step gradients, hex encoding, and random colors. No
//! rendering or GPU dependencies.

pub mod color;
pub mod convert;
pub mod error;
pub mod hex;
pub mod interpolate;
pub mod random;
pub mod step;

// Re-exports for convenience.
pub use color::{HslColor, RgbColor, RgbaColor};
pub use convert::{hsl_to_rgb, hue_to_channel, rgb_to_hsl};
pub use error::ColorError;
pub use hex::{parse_hex, rgb_to_hex, round_half_up};
pub use interpolate::{interpolate_hsl, interpolate_rgb};
pub use random::random_color;
pub use step::{Gradient, GradientIter, step_color};
