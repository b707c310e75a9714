use std::time::Duration;

use smart_leds::RGB8;

use super::Animation;
use crate::colors::{self, BLACK};

/// A comet with a rainbow tail fading toward its end.
///
/// The comet enters from one end of the strip and travels one pixel per
/// frame until it has fully left the other end, then either bounces back or
/// starts over.
#[derive(Debug, Clone)]
pub struct RainbowComet {
    speed: Duration,
    tail_length: usize,
    bounce: bool,
    step: u8,
    colorwheel_offset: u8,
    reverse: bool,
    /// Strip position of the tail end, may be off the strip.
    start: Option<isize>,
    forward: bool,
}

impl RainbowComet {
    pub fn new(speed: Duration, tail_length: usize) -> Self {
        Self {
            speed,
            tail_length: tail_length.max(1),
            bounce: true,
            step: 0,
            colorwheel_offset: 0,
            reverse: false,
            start: None,
            forward: true,
        }
    }

    #[must_use]
    pub fn with_bounce(mut self, bounce: bool) -> Self {
        self.bounce = bounce;
        self
    }

    /// Wheel distance between tail pixels. 0 spreads one wheel over the tail.
    #[must_use]
    pub fn with_step(mut self, step: u8) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn with_colorwheel_offset(mut self, offset: u8) -> Self {
        self.colorwheel_offset = offset;
        self
    }

    /// Start from the far end, moving toward pixel 0.
    #[must_use]
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self.forward = !reverse;
        self
    }

    fn effective_step(&self) -> usize {
        if self.step == 0 {
            255 / self.tail_length
        } else {
            usize::from(self.step)
        }
    }

    /// Color of tail pixel `k`, 0 being the dimmest end.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn tail_color(&self, k: usize) -> RGB8 {
        let distance = self.tail_length - 1 - k;
        let pos = (usize::from(self.colorwheel_offset) + distance * self.effective_step()) % 256;
        let brightness = (k + 1) as f32 / self.tail_length as f32;
        colors::scale(colors::wheel(pos as u8), brightness)
    }

    #[allow(clippy::cast_possible_wrap)]
    fn bounds(&self, len: usize) -> (isize, isize) {
        (1 - self.tail_length as isize, len as isize - 1)
    }

    fn advance(&mut self, len: usize) {
        let (first, last) = self.bounds(len);
        let Some(start) = self.start else {
            return;
        };

        let next = if self.forward { start + 1 } else { start - 1 };
        self.start = Some(if next > last {
            if self.bounce {
                self.forward = false;
                last
            } else {
                first
            }
        } else if next < first {
            if self.bounce {
                self.forward = true;
                first
            } else {
                last
            }
        } else {
            next
        });
    }
}

impl Animation for RainbowComet {
    fn name(&self) -> &'static str {
        "rainbow_comet"
    }

    fn speed(&self) -> Duration {
        self.speed
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn draw(&mut self, frame: &mut [RGB8], _now: Duration) {
        frame.fill(BLACK);
        if frame.is_empty() {
            return;
        }

        let (first, last) = self.bounds(frame.len());
        let start = *self
            .start
            .get_or_insert(if self.forward { first } else { last });

        for k in 0..self.tail_length {
            let offset = if self.forward {
                k
            } else {
                self.tail_length - 1 - k
            };
            let position = start + offset as isize;
            if (0..frame.len() as isize).contains(&position) {
                frame[position as usize] = self.tail_color(k);
            }
        }

        self.advance(frame.len());
    }

    fn reset(&mut self) {
        self.start = None;
        self.forward = !self.reverse;
    }
}
