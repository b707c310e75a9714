//! Color helpers.
//!
//! Pixel data is `smart_leds::RGB8`. HSV math and hex parsing go through
//! `palette::Srgb`, which is converted to 8-bit channels at the edge.

use std::str::FromStr;

use palette::{FromColor, Hsv, Srgb};
use smart_leds::RGB8;

use crate::error::{Error, Result};

/// All channels off.
pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Classic 0-255 color wheel: red → green → blue → red.
pub fn wheel(pos: u8) -> RGB8 {
    match pos {
        0..=84 => RGB8::new(255 - pos * 3, pos * 3, 0),
        85..=169 => {
            let p = pos - 85;
            RGB8::new(0, 255 - p * 3, p * 3)
        }
        _ => {
            let p = pos - 170;
            RGB8::new(p * 3, 0, 255 - p * 3)
        }
    }
}

/// Wheel colors sampled every `step` positions. A step of 0 is treated as 1.
pub fn rainbow_table(step: u8) -> Vec<RGB8> {
    let step = usize::from(step.max(1));
    (0..=255u8).step_by(step).map(wheel).collect()
}

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv)
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Srgb {
    hsv(hue, 1.0, 1.0)
}

/// Converts a float color to 8-bit channels, clamping out-of-range values.
pub fn to_rgb8(color: Srgb) -> RGB8 {
    let clamped = Srgb::new(
        color.red.clamp(0.0, 1.0),
        color.green.clamp(0.0, 1.0),
        color.blue.clamp(0.0, 1.0),
    );
    let c: Srgb<u8> = clamped.into_format();
    RGB8::new(c.red, c.green, c.blue)
}

/// Scales every channel by `factor` (clamped to 0.0-1.0), truncating.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale(color: RGB8, factor: f32) -> RGB8 {
    let factor = factor.clamp(0.0, 1.0);
    let channel = |c: u8| (f32::from(c) * factor) as u8;
    RGB8::new(channel(color.r), channel(color.g), channel(color.b))
}

/// Parses `#rrggbb`, `rrggbb`, `0xrrggbb` or the 3-digit short forms.
pub fn parse_hex(input: &str) -> Result<RGB8> {
    let trimmed = input.trim();
    let code = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    // '#' must not follow "0x"
    let digits = if code.len() == trimmed.len() {
        code.strip_prefix('#').unwrap_or(code)
    } else {
        code
    };

    // palette slices by byte offset and lets from_str_radix take signs
    if !matches!(digits.len(), 3 | 6) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidColor(input.to_string()));
    }

    let c = Srgb::<u8>::from_str(digits).map_err(|_| Error::InvalidColor(input.to_string()))?;
    Ok(RGB8::new(c.red, c.green, c.blue))
}

/// Formats a color as lowercase `#rrggbb`.
pub fn to_hex(color: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_hits_primaries_at_segment_starts() {
        assert_eq!(wheel(0), RGB8::new(255, 0, 0));
        assert_eq!(wheel(85), RGB8::new(0, 255, 0));
        assert_eq!(wheel(170), RGB8::new(0, 0, 255));
    }

    #[test]
    fn wheel_end_wraps_back_toward_red() {
        assert_eq!(wheel(255), RGB8::new(255, 0, 0));
    }

    #[test]
    fn rainbow_table_respects_step() {
        assert_eq!(rainbow_table(1).len(), 256);
        assert_eq!(rainbow_table(8).len(), 32);
        assert_eq!(rainbow_table(0).len(), 256);
        assert_eq!(rainbow_table(8)[1], wheel(8));
    }
}
