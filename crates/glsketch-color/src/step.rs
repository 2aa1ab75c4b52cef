//! Evenly spaced color sequences between two RGB endpoints.
//!
//! A sequence of `t` steps samples the interpolation factor at
//!
//! ```text
//! factor_step = 1 / (t − 1)
//! factor(i)   = factor_step × i,   i ∈ [0, t − 1]
//! ```
//!
//! so step 0 is the first endpoint and step `t − 1` the second. Sketches use
//! these to animate a color transition one frame per step.

use serde::{Deserialize, Serialize};

use crate::color::{RgbColor, RgbaColor};
use crate::error::ColorError;
use crate::interpolate::interpolate_rgb;

fn check_steps(steps: usize) -> Result<(), ColorError> {
    if steps < 2 {
        tracing::debug!("rejecting step sequence of {steps} steps");
        return Err(ColorError::TooFewSteps { steps });
    }
    Ok(())
}

/// The `i`-th of `t` evenly spaced colors from `c1` to `c2`, opaque.
///
/// # Errors
/// [`ColorError::TooFewSteps`] if `t < 2`, and [`ColorError::StepOutOfRange`]
/// if `i >= t`.
pub fn step_color(c1: RgbColor, c2: RgbColor, t: usize, i: usize) -> Result<RgbaColor, ColorError> {
    check_steps(t)?;
    if i >= t {
        return Err(ColorError::StepOutOfRange { index: i, steps: t });
    }
    Ok(sample(c1, c2, t, i))
}

// i / (t − 1) rather than factor_step × i: the product can land one ulp
// short of 1.0 on the last step (e.g. t = 50).
fn sample(c1: RgbColor, c2: RgbColor, t: usize, i: usize) -> RgbaColor {
    interpolate_rgb(c1, c2, i as f64 / (t - 1) as f64).to_rgba(1.0)
}

/// A validated step sequence, loadable from sketch configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGradient")]
pub struct Gradient {
    from: RgbColor,
    to: RgbColor,
    steps: usize,
}

#[derive(Deserialize)]
struct RawGradient {
    from: RgbColor,
    to: RgbColor,
    steps: usize,
}

impl TryFrom<RawGradient> for Gradient {
    type Error = ColorError;

    fn try_from(raw: RawGradient) -> Result<Self, Self::Error> {
        Gradient::new(raw.from, raw.to, raw.steps)
    }
}

impl Gradient {
    /// # Errors
    /// [`ColorError::TooFewSteps`] if `steps < 2`.
    pub fn new(from: RgbColor, to: RgbColor, steps: usize) -> Result<Self, ColorError> {
        check_steps(steps)?;
        Ok(Self { from, to, steps })
    }

    pub fn start(&self) -> RgbColor {
        self.from
    }

    pub fn end(&self) -> RgbColor {
        self.to
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Distance in factor space between consecutive steps.
    pub fn factor_step(&self) -> f64 {
        1.0 / (self.steps - 1) as f64
    }

    /// # Errors
    /// [`ColorError::StepOutOfRange`] if `index >= self.steps()`.
    pub fn color(&self, index: usize) -> Result<RgbaColor, ColorError> {
        step_color(self.from, self.to, self.steps, index)
    }

    /// Iterate over every step in order.
    pub fn colors(&self) -> GradientIter {
        GradientIter {
            gradient: *self,
            front: 0,
            back: self.steps,
        }
    }

    pub fn to_vec(&self) -> Vec<RgbaColor> {
        self.colors().collect()
    }
}

impl IntoIterator for &Gradient {
    type Item = RgbaColor;
    type IntoIter = GradientIter;

    fn into_iter(self) -> GradientIter {
        self.colors()
    }
}

/// Iterator over the colors of a [`Gradient`].
#[derive(Debug, Clone)]
pub struct GradientIter {
    gradient: Gradient,
    front: usize,
    back: usize,
}

impl GradientIter {
    fn at(&self, index: usize) -> RgbaColor {
        let g = &self.gradient;
        sample(g.from, g.to, g.steps, index)
    }
}

impl Iterator for GradientIter {
    type Item = RgbaColor;

    fn next(&mut self) -> Option<RgbaColor> {
        if self.front >= self.back {
            return None;
        }
        let color = self.at(self.front);
        self.front += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for GradientIter {
    fn next_back(&mut self) -> Option<RgbaColor> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.at(self.back))
    }
}

impl ExactSizeIterator for GradientIter {}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn red() -> RgbColor {
        RgbColor::new(1.0, 0.0, 0.0)
    }

    fn blue() -> RgbColor {
        RgbColor::new(0.0, 0.0, 1.0)
    }

    #[test]
    fn test_step_endpoints() {
        for t in 2..64 {
            assert_eq!(step_color(red(), blue(), t, 0).unwrap(), red().to_rgba(1.0), "t={t}");
            assert_eq!(
                step_color(red(), blue(), t, t - 1).unwrap(),
                blue().to_rgba(1.0),
                "t={t}"
            );
        }
    }

    #[test]
    fn test_step_alpha_is_opaque() {
        let c = step_color(red(), blue(), 5, 2).unwrap();
        assert_eq!(c.a, 1.0);
        assert_eq!(c, RgbaColor::opaque(0.5, 0.0, 0.5));
    }

    #[test]
    fn test_single_step_is_rejected() {
        assert_eq!(
            step_color(red(), blue(), 1, 0),
            Err(ColorError::TooFewSteps { steps: 1 })
        );
        assert_eq!(
            step_color(red(), blue(), 0, 0),
            Err(ColorError::TooFewSteps { steps: 0 })
        );
    }

    #[test]
    fn test_index_past_end_is_rejected() {
        assert_eq!(
            step_color(red(), blue(), 4, 4),
            Err(ColorError::StepOutOfRange { index: 4, steps: 4 })
        );
    }

    #[test]
    fn test_steps_are_evenly_spaced() {
        let c1 = RgbColor::new(0.1, 0.2, 0.9);
        let c2 = RgbColor::new(0.9, 0.6, 0.1);
        let t = 9;
        let factor_step = 1.0 / (t - 1) as f64;
        let colors: Vec<RgbColor> = (0..t)
            .map(|i| step_color(c1, c2, t, i).unwrap().rgb())
            .collect();
        for pair in colors.windows(2) {
            let dr = pair[1].r - pair[0].r;
            let expected = factor_step * (c2.r - c1.r);
            assert!((dr - expected).abs() < EPSILON, "{dr:.8} vs {expected:.8}");
        }
    }

    #[test]
    fn test_gradient_requires_two_steps() {
        assert_eq!(
            Gradient::new(red(), blue(), 1),
            Err(ColorError::TooFewSteps { steps: 1 })
        );
    }

    #[test]
    fn test_gradient_iter_matches_step_color() {
        let gradient = Gradient::new(red(), blue(), 6).unwrap();
        let colors = gradient.to_vec();
        assert_eq!(colors.len(), 6);
        assert_eq!(gradient.colors().len(), 6);
        for (i, c) in colors.iter().enumerate() {
            assert_eq!(*c, gradient.color(i).unwrap());
        }
        assert!((gradient.factor_step() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_gradient_iter_reversed() {
        let gradient = Gradient::new(red(), blue(), 3).unwrap();
        let mut forward = gradient.to_vec();
        forward.reverse();
        let backward: Vec<_> = gradient.colors().rev().collect();
        assert_eq!(forward, backward);
    }
}
