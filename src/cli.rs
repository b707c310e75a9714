//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::error::Result;
use crate::pin::BoardPin;
use crate::types::{AnimationKind, ByteOrder};

#[derive(Debug, Clone, Parser)]
#[command(name = "neopixel")]
#[command(about = "Control NeoPixels on a Raspberry Pi 5.")]
pub struct Cli {
    /// GPIO pin for NeoPixels (e.g., D10)
    pub pin: BoardPin,

    /// Number of pixels in the strip
    pub num_pixels: usize,

    /// Animation to run
    #[arg(value_enum)]
    pub animation: AnimationKind,

    /// Fill color for the solid animation (e.g., "#ff8800")
    #[arg(long)]
    pub color: Option<String>,

    /// Global brightness, 0.0-1.0
    #[arg(long)]
    pub brightness: Option<f32>,

    /// Channel order on the wire
    #[arg(long)]
    pub byte_order: Option<ByteOrder>,

    /// Sleep between render steps, in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// TOML file with animation parameters
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for the sparkle animation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log frames instead of driving the SPI bus
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Cli {
    /// Loads the config file (if any) and applies the flags on top.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        self.apply(&mut settings);
        settings.validate()?;
        Ok(settings)
    }

    /// Overrides `settings` with every flag that was given.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(color) = &self.color {
            settings.solid.color = Some(color.clone());
        }
        if let Some(brightness) = self.brightness {
            settings.brightness = brightness;
        }
        if let Some(byte_order) = self.byte_order {
            settings.byte_order = byte_order;
        }
        if let Some(interval_ms) = self.interval_ms {
            settings.interval_ms = interval_ms;
        }
        if let Some(seed) = self.seed {
            settings.rng_seed = Some(seed);
        }
    }
}
