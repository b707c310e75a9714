#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`PixelBuf`**: The strip's pixel buffer; applies byte order and brightness on `show`
//! - **`PixelWriter`**: Trait for the hardware that receives serialized frames
//! - **`SpiWriter`**: WS2812 over SPI MOSI (D10/D20 on a Raspberry Pi 5)
//! - **`Animation`**: Trait for frame generators (`Rainbow`, `RainbowChase`, ...)
//! - **`AnimationSequence`**: Plays several animations in turn
//! - **`Animator`**: Schedules frames of one animation onto one strip
//! - **`TimeSource`**: Trait for the monotonic clock the animator reads
//! - **`Settings`**: Runtime parameters, loadable from TOML
//!
//! Pixels are `smart_leds::RGB8`. Float colors (`palette::Srgb`) are only used
//! for HSV math and hex parsing.

pub use palette::Srgb;
pub use smart_leds::RGB8;

pub mod animation;
pub mod animator;
pub mod cli;
pub mod colors;
pub mod config;
pub mod driver;
pub mod error;
pub mod logger;
pub mod pin;
pub mod pixelbuf;
pub mod time;
pub mod types;

pub use animation::{
    Animation, AnimationSequence, Rainbow, RainbowChase, RainbowComet, RainbowSparkle, Solid,
    build_animation,
};
pub use animator::{Animator, AnimatorState, ServiceTiming};
pub use cli::Cli;
pub use colors::BLACK;
pub use config::Settings;
pub use driver::{LogWriter, PixelWriter, SpiWriter, encode_ws2812};
pub use error::{Error, Result};
pub use pin::BoardPin;
pub use pixelbuf::PixelBuf;
pub use time::{SystemClock, TimeSource};
pub use types::{AnimationKind, ByteOrder};
