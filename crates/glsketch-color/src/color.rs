//! Color value types shared by every sketch.
//!
//! Channels are conventionally normalized to `[0, 1]`, but nothing here
//! clamps them. Out-of-range values flow through conversions and
//! interpolation unchanged; normalizing inputs is the caller's job.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::hex::{parse_hex, rgb_to_hex};

/// An RGB color with double-precision channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl RgbColor {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// A gray with every channel set to `v`.
    pub const fn gray(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Channels as an `[r, g, b]` array.
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Narrow to single precision and attach an alpha channel.
    pub fn to_rgba(self, alpha: f32) -> RgbaColor {
        RgbaColor::new(self.r as f32, self.g as f32, self.b as f32, alpha)
    }
}

impl From<[f64; 3]> for RgbColor {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<RgbColor> for glam::DVec3 {
    fn from(c: RgbColor) -> Self {
        glam::DVec3::new(c.r, c.g, c.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&rgb_to_hex(*self))
    }
}

impl FromStr for RgbColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

/// Single-precision RGBA color handed to rendering code.
///
/// Laid out as four consecutive `f32`s so a slice of these can be cast
/// straight into a vertex-color buffer.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct RgbaColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl RgbaColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color (alpha 1.0).
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Drop alpha and widen back to double precision.
    pub fn rgb(self) -> RgbColor {
        RgbColor::new(f64::from(self.r), f64::from(self.g), f64::from(self.b))
    }
}

impl From<RgbaColor> for [f32; 4] {
    fn from(c: RgbaColor) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl From<RgbaColor> for glam::Vec4 {
    fn from(c: RgbaColor) -> Self {
        glam::Vec4::new(c.r, c.g, c.b, c.a)
    }
}

/// Hue, saturation, lightness triple.
///
/// Every component follows the `[0, 1]` convention, hue included (a full
/// turn is 1.0, not 360°).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HslColor(pub [f64; 3]);

impl HslColor {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self([hue, saturation, lightness])
    }

    pub const fn hue(&self) -> f64 {
        self.0[0]
    }

    pub const fn saturation(&self) -> f64 {
        self.0[1]
    }

    pub const fn lightness(&self) -> f64 {
        self.0[2]
    }
}

impl Index<usize> for HslColor {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl From<HslColor> for glam::DVec3 {
    fn from(c: HslColor) -> Self {
        glam::DVec3::from_array(c.0)
    }
}
