use std::time::Duration;

use smart_leds::RGB8;

use super::Animation;
use crate::colors::{self, BLACK};

/// Rainbow-colored bars separated by dark gaps, moving one pixel per frame.
///
/// Each bar takes the wheel color one step behind the bar ahead of it, and
/// the whole palette advances one step every time the pattern has moved a
/// strip length.
#[derive(Debug, Clone)]
pub struct RainbowChase {
    speed: Duration,
    size: usize,
    spacing: usize,
    reverse: bool,
    colors: Vec<RGB8>,
    offset: usize,
    color_index: usize,
    draw_count: usize,
}

impl RainbowChase {
    pub fn new(speed: Duration, size: usize, spacing: usize) -> Self {
        Self {
            speed,
            size: size.max(1),
            spacing,
            reverse: false,
            colors: colors::rainbow_table(8),
            offset: 0,
            color_index: 0,
            draw_count: 0,
        }
    }

    #[must_use]
    pub fn with_step(mut self, step: u8) -> Self {
        self.colors = colors::rainbow_table(step);
        self
    }

    #[must_use]
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    fn repeat_width(&self) -> usize {
        self.size + self.spacing
    }

    fn bar_color(&self, bar: usize) -> RGB8 {
        let len = self.colors.len();
        self.colors[(self.color_index + len - bar % len) % len]
    }
}

impl Animation for RainbowChase {
    fn name(&self) -> &'static str {
        "rainbow_chase"
    }

    fn speed(&self) -> Duration {
        self.speed
    }

    fn draw(&mut self, frame: &mut [RGB8], _now: Duration) {
        if frame.is_empty() {
            return;
        }

        let width = self.repeat_width();
        for (i, pixel) in frame.iter_mut().enumerate() {
            let position = i + width - self.offset;
            *pixel = if position % width < self.size {
                self.bar_color(position / width)
            } else {
                BLACK
            };
        }

        self.draw_count += 1;
        if self.draw_count % frame.len() == 0 {
            self.color_index = (self.color_index + 1) % self.colors.len();
        }

        self.offset = if self.reverse {
            (self.offset + width - 1) % width
        } else {
            (self.offset + 1) % width
        };
    }

    fn reset(&mut self) {
        self.offset = 0;
        self.color_index = 0;
        self.draw_count = 0;
    }
}
