//! Error type shared by the library and the `neopixel` binary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown pin name: {0}")]
    InvalidPin(String),

    #[error("pin {pin} is not a SPI MOSI line; wire the strip to D10 (SPI0) or D20 (SPI1)")]
    UnsupportedPin { pin: String },

    #[error("invalid hex color: {0}")]
    InvalidColor(String),

    #[error("unknown byte order: {0}")]
    InvalidByteOrder(String),

    #[error("the solid animation needs a color (use --color)")]
    MissingColor,

    #[error("animation sequence must have at least one animation")]
    EmptySequence,

    #[error("pixel index {index} out of range for a strip of {len}")]
    PixelIndex { index: usize, len: usize },

    #[error("invalid state: expected {expected}, but animator is {actual:?}")]
    InvalidState {
        expected: &'static str,
        actual: crate::animator::AnimatorState,
    },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SPI error: {0}")]
    Spi(#[from] rppal::spi::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
