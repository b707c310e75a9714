//! Runtime settings, loadable from a TOML file.
//!
//! Every key is optional; missing keys take the defaults below, which are the
//! parameters the animations were tuned with. Command-line flags are applied
//! on top by the binary.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::ByteOrder;

const DEFAULT_SPEED_MS: u64 = 20;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Sleep between render steps of the main loop.
    pub interval_ms: u64,
    pub brightness: f32,
    pub byte_order: ByteOrder,
    /// Seed for the sparkle animation; random when absent.
    pub rng_seed: Option<u64>,
    pub rainbow: RainbowSettings,
    pub rainbow_chase: ChaseSettings,
    pub rainbow_comet: CometSettings,
    pub rainbow_sparkle: SparkleSettings,
    pub cycle: CycleSettings,
    pub solid: SolidSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_SPEED_MS,
            brightness: 1.0,
            byte_order: ByteOrder::Grb,
            rng_seed: None,
            rainbow: RainbowSettings::default(),
            rainbow_chase: ChaseSettings::default(),
            rainbow_comet: CometSettings::default(),
            rainbow_sparkle: SparkleSettings::default(),
            cycle: CycleSettings::default(),
            solid: SolidSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RainbowSettings {
    pub speed_ms: u64,
    /// Time for the rainbow to scroll one full wheel.
    pub period_ms: u64,
    pub step: u8,
}

impl Default for RainbowSettings {
    fn default() -> Self {
        Self {
            speed_ms: DEFAULT_SPEED_MS,
            period_ms: 2_000,
            step: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChaseSettings {
    pub speed_ms: u64,
    pub size: usize,
    pub spacing: usize,
    pub step: u8,
    pub reverse: bool,
}

impl Default for ChaseSettings {
    fn default() -> Self {
        Self {
            speed_ms: DEFAULT_SPEED_MS,
            size: 5,
            spacing: 3,
            step: 8,
            reverse: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CometSettings {
    pub speed_ms: u64,
    pub tail_length: usize,
    pub bounce: bool,
    /// Wheel distance between tail pixels; 0 spreads one wheel over the tail.
    pub step: u8,
    pub colorwheel_offset: u8,
    pub reverse: bool,
}

impl Default for CometSettings {
    fn default() -> Self {
        Self {
            speed_ms: DEFAULT_SPEED_MS,
            tail_length: 7,
            bounce: true,
            step: 0,
            colorwheel_offset: 0,
            reverse: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SparkleSettings {
    pub speed_ms: u64,
    pub period_ms: u64,
    pub step: u8,
    pub num_sparkles: usize,
    pub background_brightness: f32,
}

impl Default for SparkleSettings {
    fn default() -> Self {
        Self {
            speed_ms: DEFAULT_SPEED_MS,
            period_ms: 5_000,
            step: 1,
            num_sparkles: 15,
            background_brightness: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CycleSettings {
    pub advance_interval_ms: u64,
    pub auto_clear: bool,
}

impl Default for CycleSettings {
    fn default() -> Self {
        Self {
            advance_interval_ms: 5_000,
            auto_clear: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolidSettings {
    pub speed_ms: u64,
    /// Hex color, e.g. `"#ff8800"`.
    pub color: Option<String>,
}

impl Default for SolidSettings {
    fn default() -> Self {
        Self {
            speed_ms: DEFAULT_SPEED_MS,
            color: None,
        }
    }
}

impl Settings {
    /// Reads, parses and validates a TOML settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Rejects values the animations cannot run with. A `speed_ms` of zero is
    /// allowed and means "draw on every loop tick".
    pub fn validate(&self) -> Result<()> {
        let fail = |message: &str| {
            Err(Error::Config {
                message: message.to_string(),
            })
        };

        if self.interval_ms == 0 {
            return fail("interval_ms must be greater than zero");
        }
        if !(0.0..=1.0).contains(&self.brightness) {
            return fail("brightness must be between 0.0 and 1.0");
        }
        if self.rainbow.period_ms == 0 || self.rainbow_sparkle.period_ms == 0 {
            return fail("rainbow period must be greater than zero");
        }
        if self.rainbow_chase.size == 0 {
            return fail("rainbow_chase size must be greater than zero");
        }
        if self.rainbow_comet.tail_length == 0 {
            return fail("rainbow_comet tail_length must be greater than zero");
        }
        if !(0.0..=1.0).contains(&self.rainbow_sparkle.background_brightness) {
            return fail("rainbow_sparkle background_brightness must be between 0.0 and 1.0");
        }
        if self.cycle.advance_interval_ms == 0 {
            return fail("cycle advance_interval_ms must be greater than zero");
        }
        Ok(())
    }
}
