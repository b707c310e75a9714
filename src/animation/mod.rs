//! The animation set and the name → animation map.
//!
//! Animations paint a whole frame into a pixel slice at a given time. They
//! never transmit; the [`Animator`](crate::animator::Animator) decides when a
//! frame is due and shows it.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use smart_leds::RGB8;

use crate::colors;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::types::AnimationKind;

mod chase;
mod comet;
mod rainbow;
mod sequence;
mod solid;
mod sparkle;

pub use chase::RainbowChase;
pub use comet::RainbowComet;
pub use rainbow::Rainbow;
pub use sequence::AnimationSequence;
pub use solid::Solid;
pub use sparkle::RainbowSparkle;

/// A frame generator.
pub trait Animation {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Minimum time between two frames.
    fn speed(&self) -> Duration;

    /// Paints the frame for time `now`.
    fn draw(&mut self, frame: &mut [RGB8], now: Duration);

    /// Returns to the initial state, as if never drawn.
    fn reset(&mut self) {}

    /// Applies any transition due at `now` ahead of the next draw. Returns
    /// `true` when the strip should be shown dark before that draw.
    fn poll_clear(&mut self, _now: Duration) -> bool {
        false
    }
}

impl<A: Animation + ?Sized> Animation for Box<A> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn speed(&self) -> Duration {
        (**self).speed()
    }

    fn draw(&mut self, frame: &mut [RGB8], now: Duration) {
        (**self).draw(frame, now);
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn poll_clear(&mut self, now: Duration) -> bool {
        (**self).poll_clear(now)
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn rainbow(settings: &Settings) -> Rainbow {
    let s = &settings.rainbow;
    Rainbow::new(
        Duration::from_millis(s.speed_ms),
        Duration::from_millis(s.period_ms),
    )
    .with_step(s.step)
}

fn rainbow_chase(settings: &Settings) -> RainbowChase {
    let s = &settings.rainbow_chase;
    RainbowChase::new(Duration::from_millis(s.speed_ms), s.size, s.spacing)
        .with_step(s.step)
        .with_reverse(s.reverse)
}

fn rainbow_comet(settings: &Settings) -> RainbowComet {
    let s = &settings.rainbow_comet;
    RainbowComet::new(Duration::from_millis(s.speed_ms), s.tail_length)
        .with_bounce(s.bounce)
        .with_step(s.step)
        .with_colorwheel_offset(s.colorwheel_offset)
        .with_reverse(s.reverse)
}

fn rainbow_sparkle(settings: &Settings) -> RainbowSparkle {
    let s = &settings.rainbow_sparkle;
    RainbowSparkle::new(
        Duration::from_millis(s.speed_ms),
        s.num_sparkles,
        rng_from(settings.rng_seed),
    )
    .with_period(Duration::from_millis(s.period_ms))
    .with_step(s.step)
    .with_background_brightness(s.background_brightness)
}

/// Builds the animation selected on the command line.
pub fn build_animation(kind: AnimationKind, settings: &Settings) -> Result<Box<dyn Animation>> {
    let animation: Box<dyn Animation> = match kind {
        AnimationKind::Rainbow => Box::new(rainbow(settings)),
        AnimationKind::RainbowChase => Box::new(rainbow_chase(settings)),
        AnimationKind::RainbowComet => Box::new(rainbow_comet(settings)),
        AnimationKind::RainbowSparkle => Box::new(rainbow_sparkle(settings)),
        AnimationKind::Cycle => {
            let members: Vec<Box<dyn Animation>> = vec![
                Box::new(rainbow(settings)),
                Box::new(rainbow_chase(settings)),
                Box::new(rainbow_comet(settings)),
                Box::new(rainbow_sparkle(settings)),
            ];
            let sequence = AnimationSequence::new(
                members,
                Duration::from_millis(settings.cycle.advance_interval_ms),
            )?
            .with_auto_clear(settings.cycle.auto_clear);
            Box::new(sequence)
        }
        AnimationKind::Solid => {
            let hex = settings.solid.color.as_deref().ok_or(Error::MissingColor)?;
            let color = colors::parse_hex(hex)?;
            Box::new(Solid::new(color).with_speed(Duration::from_millis(settings.solid.speed_ms)))
        }
    };
    Ok(animation)
}
