use std::time::Duration;

use smart_leds::RGB8;

use super::Animation;

const DEFAULT_SPEED: Duration = Duration::from_millis(20);

/// Fills the strip with one color.
#[derive(Debug, Clone)]
pub struct Solid {
    color: RGB8,
    speed: Duration,
}

impl Solid {
    pub fn new(color: RGB8) -> Self {
        Self {
            color,
            speed: DEFAULT_SPEED,
        }
    }

    #[must_use]
    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.speed = speed;
        self
    }

    pub fn color(&self) -> RGB8 {
        self.color
    }
}

impl Animation for Solid {
    fn name(&self) -> &'static str {
        "solid"
    }

    fn speed(&self) -> Duration {
        self.speed
    }

    fn draw(&mut self, frame: &mut [RGB8], _now: Duration) {
        frame.fill(self.color);
    }
}
