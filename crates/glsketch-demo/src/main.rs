//! glsketch demo — prints a step gradient as hex colors.
//!
//! Stands in for a sketch's color setup: it resolves the configured gradient,
//! owns the random generator, and writes each step to stdout for inspection.

mod config;
mod error;

use std::io::Write;
use std::process::ExitCode;

use glsketch_color::{Gradient, RgbaColor, random_color, rgb_to_hex};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::DemoError;

fn main() -> ExitCode {
    init_tracing();

    let config = AppConfig::default();
    match run(&config, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("glsketch demo failed: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &AppConfig, out: &mut impl Write) -> Result<(), DemoError> {
    let gradient = config.gradient()?;
    tracing::info!(
        "printing {} steps from {} to {}",
        gradient.steps(),
        gradient.start(),
        gradient.end()
    );
    write_gradient(&gradient, out)?;

    if config.random {
        let color = match config.seed {
            Some(seed) => {
                tracing::debug!("random color seeded with {seed}");
                random_color(&mut StdRng::seed_from_u64(seed))
            }
            None => random_color(&mut rand::rng()),
        };
        write_line("random", color, out)?;
    }
    Ok(())
}

fn write_gradient(gradient: &Gradient, out: &mut impl Write) -> std::io::Result<()> {
    for (i, color) in gradient.colors().enumerate() {
        write_line(&i.to_string(), color, out)?;
    }
    Ok(())
}

fn write_line(label: &str, color: RgbaColor, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "{label}\t{}\t{:.4} {:.4} {:.4}",
        rgb_to_hex(color.rgb()),
        color.r,
        color.g,
        color.b
    )
}
