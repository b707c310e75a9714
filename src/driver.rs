//! Pixel transport abstraction and the WS2812-over-SPI driver.
//!
//! WS2812 LEDs read an 800 kHz NRZ signal on a single data line. Clocking the
//! SPI controller at 2.4 MHz lets every data bit be written as three SPI bits
//! (`110` for one, `100` for zero), so the MOSI pin produces the right pulse
//! widths without bit-banging.

use std::fmt::Write as _;

use rppal::spi::{Mode, SlaveSelect, Spi};

use crate::error::{Error, Result};
use crate::pin::BoardPin;

/// SPI clock: three SPI bits per WS2812 bit at 800 kHz.
pub const SPI_CLOCK_HZ: u32 = 2_400_000;

/// Zero bytes appended after each frame. At 2.4 MHz a byte lasts ~3.33 us,
/// so 84 bytes hold the line low for the 280 us WS2812B reset.
pub const LATCH_BYTES: usize = 84;

/// Default spidev transfer limit (`spidev.bufsiz`).
pub const SPIDEV_BUFSIZ: usize = 4096;

const ONE: u32 = 0b110;
const ZERO: u32 = 0b100;

/// Trait for abstracting the hardware that receives a serialized frame.
///
/// `buf` holds the pixel bytes already in wire byte order and scaled by
/// brightness, three bytes per pixel.
pub trait PixelWriter {
    fn transmit(&mut self, buf: &[u8]) -> Result<()>;
}

impl<W: PixelWriter + ?Sized> PixelWriter for Box<W> {
    fn transmit(&mut self, buf: &[u8]) -> Result<()> {
        (**self).transmit(buf)
    }
}

/// Expands pixel bytes into the SPI bit stream, followed by the latch.
pub fn encode_ws2812(buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len() * 3 + LATCH_BYTES);
    for &byte in buf {
        let mut bits: u32 = 0;
        for i in (0..8).rev() {
            let pattern = if byte & (1 << i) != 0 { ONE } else { ZERO };
            bits = (bits << 3) | pattern;
        }
        out.extend_from_slice(&bits.to_be_bytes()[1..]);
    }
    out.resize(out.len() + LATCH_BYTES, 0);
    out
}

/// Drives a strip whose data line is on a SPI MOSI pin.
pub struct SpiWriter {
    spi: Spi,
    scratch: Vec<u8>,
}

impl SpiWriter {
    /// Opens the SPI controller that owns `pin`.
    pub fn open(pin: BoardPin) -> Result<Self> {
        let bus = pin.spi_bus().ok_or_else(|| Error::UnsupportedPin {
            pin: pin.to_string(),
        })?;
        let spi = Spi::new(bus, SlaveSelect::Ss0, SPI_CLOCK_HZ, Mode::Mode0)?;
        tracing::debug!(%pin, ?bus, clock_hz = SPI_CLOCK_HZ, "opened SPI bus");

        Ok(Self {
            spi,
            scratch: Vec::new(),
        })
    }
}

impl PixelWriter for SpiWriter {
    fn transmit(&mut self, buf: &[u8]) -> Result<()> {
        self.scratch = encode_ws2812(buf);
        if self.scratch.len() > SPIDEV_BUFSIZ {
            tracing::warn!(
                bytes = self.scratch.len(),
                limit = SPIDEV_BUFSIZ,
                "frame exceeds the default spidev buffer; raise spidev.bufsiz if writes fail"
            );
        }
        self.spi.write(&self.scratch)?;
        Ok(())
    }
}

/// Writer that logs frames instead of driving hardware.
#[derive(Debug, Default)]
pub struct LogWriter {
    frames: u64,
    last_frame: Vec<u8>,
}

impl LogWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames transmitted so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> &[u8] {
        &self.last_frame
    }
}

impl PixelWriter for LogWriter {
    fn transmit(&mut self, buf: &[u8]) -> Result<()> {
        self.frames += 1;
        self.last_frame.clear();
        self.last_frame.extend_from_slice(buf);

        if tracing::enabled!(tracing::Level::TRACE) {
            let mut hex = String::with_capacity(buf.len() * 2);
            for byte in buf {
                let _ = write!(hex, "{byte:02x}");
            }
            tracing::trace!(frame = self.frames, %hex, "transmit");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_all_ones_and_zeros() {
        let out = encode_ws2812(&[0xFF, 0x00]);
        // 110 repeated eight times, 100 repeated eight times
        assert_eq!(&out[..3], &[0xDB, 0x6D, 0xB6]);
        assert_eq!(&out[3..6], &[0x92, 0x49, 0x24]);
    }

    #[test]
    fn appends_latch() {
        let out = encode_ws2812(&[0x12, 0x34, 0x56]);
        assert_eq!(out.len(), 9 + LATCH_BYTES);
        assert!(out[9..].iter().all(|&b| b == 0));
    }

    #[test]
    fn log_writer_keeps_last_frame() {
        let mut writer = LogWriter::new();
        writer.transmit(&[1, 2, 3]).unwrap();
        writer.transmit(&[4, 5, 6]).unwrap();
        assert_eq!(writer.frames(), 2);
        assert_eq!(writer.last_frame(), &[4, 5, 6]);
    }
}
