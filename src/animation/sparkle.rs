use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::index;
use smart_leds::RGB8;

use super::{Animation, Rainbow};
use crate::colors;

const DEFAULT_PERIOD: Duration = Duration::from_secs(5);
const DEFAULT_BACKGROUND: f32 = 0.2;

/// A dimmed rainbow with randomly placed full-brightness sparkles.
#[derive(Debug, Clone)]
pub struct RainbowSparkle {
    rainbow: Rainbow,
    num_sparkles: usize,
    background_brightness: f32,
    rng: StdRng,
    sparkles: Vec<(usize, RGB8)>,
}

impl RainbowSparkle {
    pub fn new(speed: Duration, num_sparkles: usize, rng: StdRng) -> Self {
        Self {
            rainbow: Rainbow::new(speed, DEFAULT_PERIOD),
            num_sparkles,
            background_brightness: DEFAULT_BACKGROUND,
            rng,
            sparkles: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.rainbow = self.rainbow.with_period(period);
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: u8) -> Self {
        self.rainbow = self.rainbow.with_step(step);
        self
    }

    #[must_use]
    pub fn with_background_brightness(mut self, brightness: f32) -> Self {
        self.background_brightness = brightness.clamp(0.0, 1.0);
        self
    }

    /// Indices lit at full brightness in the last frame.
    pub fn last_sparkles(&self) -> impl Iterator<Item = usize> + '_ {
        self.sparkles.iter().map(|&(i, _)| i)
    }
}

impl Animation for RainbowSparkle {
    fn name(&self) -> &'static str {
        "rainbow_sparkle"
    }

    fn speed(&self) -> Duration {
        self.rainbow.speed()
    }

    fn draw(&mut self, frame: &mut [RGB8], now: Duration) {
        self.rainbow.draw(frame, now);

        let amount = self.num_sparkles.min(frame.len());
        self.sparkles.clear();
        self.sparkles.extend(
            index::sample(&mut self.rng, frame.len(), amount)
                .into_iter()
                .map(|i| (i, frame[i])),
        );

        for pixel in frame.iter_mut() {
            *pixel = colors::scale(*pixel, self.background_brightness);
        }
        for &(i, color) in &self.sparkles {
            frame[i] = color;
        }
    }

    fn reset(&mut self) {
        self.rainbow.reset();
        self.sparkles.clear();
    }
}
