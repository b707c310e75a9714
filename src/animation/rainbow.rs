use std::time::Duration;

use smart_leds::RGB8;

use super::Animation;
use crate::colors;

/// Scrolls the color wheel along the strip.
///
/// Pixel `i` shows wheel entry `offset + i`, and `offset` walks the whole
/// wheel once per `period`.
#[derive(Debug, Clone)]
pub struct Rainbow {
    speed: Duration,
    period: Duration,
    step: u8,
    colors: Vec<RGB8>,
    origin: Option<Duration>,
}

impl Rainbow {
    pub fn new(speed: Duration, period: Duration) -> Self {
        Self {
            speed,
            period,
            step: 1,
            colors: colors::rainbow_table(1),
            origin: None,
        }
    }

    /// Wheel positions skipped between adjacent pixels.
    #[must_use]
    pub fn with_step(mut self, step: u8) -> Self {
        self.step = step.max(1);
        self.colors = colors::rainbow_table(self.step);
        self
    }

    /// Time for one full trip around the wheel.
    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Wheel table index for the first pixel at time `now`.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn offset_at(&mut self, now: Duration) -> usize {
        let origin = *self.origin.get_or_insert(now);
        let period = self.period.as_nanos().max(1);
        let position = now.saturating_sub(origin).as_nanos() % period;
        (position * self.colors.len() as u128 / period) as usize
    }

    /// Color of pixel `index` for the given wheel offset.
    pub(crate) fn color(&self, offset: usize, index: usize) -> RGB8 {
        self.colors[(offset + index) % self.colors.len()]
    }
}

impl Animation for Rainbow {
    fn name(&self) -> &'static str {
        "rainbow"
    }

    fn speed(&self) -> Duration {
        self.speed
    }

    fn draw(&mut self, frame: &mut [RGB8], now: Duration) {
        let offset = self.offset_at(now);
        for (i, pixel) in frame.iter_mut().enumerate() {
            *pixel = self.color(offset, i);
        }
    }

    fn reset(&mut self) {
        self.origin = None;
    }
}
