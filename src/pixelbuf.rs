//! In-memory pixel buffer with byte-order and brightness handling.

use smart_leds::RGB8;

use crate::colors::{self, BLACK};
use crate::driver::PixelWriter;
use crate::error::{Error, Result};
use crate::types::ByteOrder;

/// A strip of pixels backed by a [`PixelWriter`].
///
/// Colors are stored at full brightness; brightness and byte order are only
/// applied when the frame is serialized by [`PixelBuf::show`].
pub struct PixelBuf<W: PixelWriter> {
    writer: W,
    pixels: Vec<RGB8>,
    byte_order: ByteOrder,
    brightness: f32,
    auto_write: bool,
    wire: Vec<u8>,
}

impl<W: PixelWriter> PixelBuf<W> {
    /// Creates a buffer of `len` dark pixels. Nothing is transmitted yet.
    pub fn new(writer: W, len: usize, byte_order: ByteOrder) -> Self {
        Self {
            writer,
            pixels: vec![BLACK; len],
            byte_order,
            brightness: 1.0,
            auto_write: false,
            wire: Vec::with_capacity(len * 3),
        }
    }

    #[must_use]
    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.set_brightness(brightness);
        self
    }

    /// When enabled, `set` and `fill` transmit immediately.
    #[must_use]
    pub fn with_auto_write(mut self, auto_write: bool) -> Self {
        self.auto_write = auto_write;
        self
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<RGB8> {
        self.pixels.get(index).copied()
    }

    pub fn set(&mut self, index: usize, color: RGB8) -> Result<()> {
        let len = self.pixels.len();
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(Error::PixelIndex { index, len })?;
        *pixel = color;

        if self.auto_write {
            self.show()?;
        }
        Ok(())
    }

    pub fn fill(&mut self, color: RGB8) -> Result<()> {
        self.pixels.fill(color);

        if self.auto_write {
            self.show()?;
        }
        Ok(())
    }

    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels
    }

    /// Direct frame access for animations. Does not auto-write.
    pub fn pixels_mut(&mut self) -> &mut [RGB8] {
        &mut self.pixels
    }

    /// Serializes the frame and hands it to the writer.
    pub fn show(&mut self) -> Result<()> {
        self.wire.clear();
        for &pixel in &self.pixels {
            let scaled = if self.brightness < 1.0 {
                colors::scale(pixel, self.brightness)
            } else {
                pixel
            };
            self.wire.extend_from_slice(&self.byte_order.arrange(scaled));
        }
        self.writer.transmit(&self.wire)
    }

    /// Turns every pixel off and transmits, regardless of `auto_write`.
    pub fn clear(&mut self) -> Result<()> {
        self.pixels.fill(BLACK);
        self.show()
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Sets brightness, clamped to 0.0-1.0.
    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness.clamp(0.0, 1.0);
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}
