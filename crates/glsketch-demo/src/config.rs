//! Application configuration for the demo.

use std::path::PathBuf;
use std::str::FromStr;

use glsketch_color::{Gradient, RgbColor};

use crate::error::DemoError;

/// Default gradient start.
const DEFAULT_FROM: RgbColor = RgbColor::new(1.0, 0.0, 0.0);
/// Default gradient end.
const DEFAULT_TO: RgbColor = RgbColor::new(0.0, 0.0, 1.0);
/// Default number of gradient steps.
const DEFAULT_STEPS: usize = 8;

/// Runtime configuration for the glsketch demo.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// First gradient color.
    pub from: RgbColor,
    /// Last gradient color.
    pub to: RgbColor,
    /// Number of colors in the printed sequence.
    pub steps: usize,
    /// Seed for the random color. `None` uses the thread-local generator.
    pub seed: Option<u64>,
    /// Whether to print a random color after the gradient.
    pub random: bool,
    /// JSON gradient file overriding `from`, `to`, and `steps`.
    pub gradient_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            from: env_or("GLSKETCH_FROM", DEFAULT_FROM),
            to: env_or("GLSKETCH_TO", DEFAULT_TO),
            steps: env_or("GLSKETCH_STEPS", DEFAULT_STEPS),
            seed: env_parsed("GLSKETCH_SEED"),
            random: std::env::var("GLSKETCH_RANDOM").is_ok(),
            gradient_file: std::env::var_os("GLSKETCH_CONFIG").map(PathBuf::from),
        }
    }
}

impl AppConfig {
    /// Resolve the gradient to print, reading the JSON file if one is set.
    ///
    /// # Errors
    /// Fails if the file cannot be read or parsed, or if the configured step
    /// count is below 2.
    pub fn gradient(&self) -> Result<Gradient, DemoError> {
        match &self.gradient_file {
            Some(path) => {
                tracing::info!("loading gradient from {}", path.display());
                let text = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&text)?)
            }
            None => Ok(Gradient::new(self.from, self.to, self.steps)?),
        }
    }
}

fn env_parsed<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("ignoring unparsable {key}={raw:?}");
            None
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env_parsed(key).unwrap_or(default)
}
