//! Core types shared by the CLI, the config file and the animations.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;
use smart_leds::RGB8;

use crate::error::Error;

/// Order in which a pixel's channels go out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ByteOrder {
    Rgb,
    Rbg,
    /// WS2812 native order.
    #[default]
    Grb,
    Gbr,
    Brg,
    Bgr,
}

impl ByteOrder {
    /// Reorders a pixel's channels into wire order.
    #[inline]
    pub fn arrange(self, c: RGB8) -> [u8; 3] {
        match self {
            ByteOrder::Rgb => [c.r, c.g, c.b],
            ByteOrder::Rbg => [c.r, c.b, c.g],
            ByteOrder::Grb => [c.g, c.r, c.b],
            ByteOrder::Gbr => [c.g, c.b, c.r],
            ByteOrder::Brg => [c.b, c.r, c.g],
            ByteOrder::Bgr => [c.b, c.g, c.r],
        }
    }
}

impl FromStr for ByteOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RGB" => Ok(ByteOrder::Rgb),
            "RBG" => Ok(ByteOrder::Rbg),
            "GRB" => Ok(ByteOrder::Grb),
            "GBR" => Ok(ByteOrder::Gbr),
            "BRG" => Ok(ByteOrder::Brg),
            "BGR" => Ok(ByteOrder::Bgr),
            _ => Err(Error::InvalidByteOrder(s.to_string())),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ByteOrder::Rgb => "RGB",
            ByteOrder::Rbg => "RBG",
            ByteOrder::Grb => "GRB",
            ByteOrder::Gbr => "GBR",
            ByteOrder::Brg => "BRG",
            ByteOrder::Bgr => "BGR",
        };
        f.write_str(name)
    }
}

/// The animations selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum AnimationKind {
    Rainbow,
    RainbowChase,
    RainbowComet,
    RainbowSparkle,
    /// The four rainbow animations in turn.
    Cycle,
    /// Static fill with `--color`.
    Solid,
}

impl AnimationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationKind::Rainbow => "rainbow",
            AnimationKind::RainbowChase => "rainbow_chase",
            AnimationKind::RainbowComet => "rainbow_comet",
            AnimationKind::RainbowSparkle => "rainbow_sparkle",
            AnimationKind::Cycle => "cycle",
            AnimationKind::Solid => "solid",
        }
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grb_puts_green_first() {
        let c = RGB8::new(1, 2, 3);
        assert_eq!(ByteOrder::Grb.arrange(c), [2, 1, 3]);
        assert_eq!(ByteOrder::Bgr.arrange(c), [3, 2, 1]);
    }

    #[test]
    fn byte_order_parses_case_insensitively() {
        assert_eq!("grb".parse::<ByteOrder>().unwrap(), ByteOrder::Grb);
        assert_eq!("RGB".parse::<ByteOrder>().unwrap(), ByteOrder::Rgb);
        assert!("RGBW".parse::<ByteOrder>().is_err());
    }

    #[test]
    fn animation_names_use_snake_case() {
        let kind = <AnimationKind as ValueEnum>::from_str("rainbow_chase", false).unwrap();
        assert_eq!(kind, AnimationKind::RainbowChase);
        assert_eq!(kind.to_string(), "rainbow_chase");
    }
}
