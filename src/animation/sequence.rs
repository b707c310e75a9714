use std::time::Duration;

use smart_leds::RGB8;

use super::Animation;
use crate::colors::BLACK;
use crate::error::{Error, Result};

/// Plays a list of animations in turn, switching every `advance_interval`.
pub struct AnimationSequence {
    members: Vec<Box<dyn Animation>>,
    advance_interval: Duration,
    auto_clear: bool,
    current: usize,
    last_advance: Option<Duration>,
}

impl AnimationSequence {
    pub fn new(members: Vec<Box<dyn Animation>>, advance_interval: Duration) -> Result<Self> {
        if members.is_empty() {
            return Err(Error::EmptySequence);
        }

        Ok(Self {
            members,
            advance_interval,
            auto_clear: true,
            current: 0,
            last_advance: None,
        })
    }

    /// Black out the frame when switching to the next animation.
    #[must_use]
    pub fn with_auto_clear(mut self, auto_clear: bool) -> Self {
        self.auto_clear = auto_clear;
        self
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_name(&self) -> &'static str {
        self.members[self.current].name()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Moves to the next member once the interval has elapsed. Returns
    /// whether it advanced.
    fn advance_if_due(&mut self, now: Duration) -> bool {
        let last = *self.last_advance.get_or_insert(now);
        if now.saturating_sub(last) < self.advance_interval {
            return false;
        }

        self.current = (self.current + 1) % self.members.len();
        self.members[self.current].reset();
        self.last_advance = Some(now);
        tracing::debug!(animation = self.current_name(), "advancing sequence");
        true
    }
}

impl Animation for AnimationSequence {
    fn name(&self) -> &'static str {
        "cycle"
    }

    fn speed(&self) -> Duration {
        self.members[self.current].speed()
    }

    fn draw(&mut self, frame: &mut [RGB8], now: Duration) {
        if self.advance_if_due(now) && self.auto_clear {
            frame.fill(BLACK);
        }
        self.members[self.current].draw(frame, now);
    }

    fn poll_clear(&mut self, now: Duration) -> bool {
        self.advance_if_due(now) && self.auto_clear
    }

    fn reset(&mut self) {
        self.current = 0;
        self.last_advance = None;
        for member in &mut self.members {
            member.reset();
        }
    }
}
