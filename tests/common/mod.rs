//! Shared test infrastructure for neopixel-pi integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::Cell;
use std::time::Duration;

use neopixel_pi::{PixelWriter, RGB8, TimeSource};

// ============================================================================
// Mock Writer
// ============================================================================

/// Mock writer that records every transmitted frame
#[derive(Debug, Default)]
pub struct MockWriter {
    frames: Vec<Vec<u8>>,
}

impl MockWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Vec<u8>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[u8]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl PixelWriter for MockWriter {
    fn transmit(&mut self, buf: &[u8]) -> neopixel_pi::Result<()> {
        self.frames.push(buf.to_vec());
        Ok(())
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<Duration>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(Duration::ZERO),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance_ms(&self, millis: u64) {
        self.current_time
            .set(self.current_time.get() + Duration::from_millis(millis));
    }

    pub fn set_time(&self, time: Duration) {
        self.current_time.set(time);
    }
}

impl TimeSource for MockTimeSource {
    fn now(&self) -> Duration {
        self.current_time.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
pub const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
pub const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };
pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// A frame of `len` dark pixels
pub fn frame(len: usize) -> Vec<RGB8> {
    vec![BLACK; len]
}

pub fn is_dark(color: RGB8) -> bool {
    color == BLACK
}
