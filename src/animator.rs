//! Frame scheduler driving one animation onto one strip.
//!
//! Provides [`Animator`], which owns the pixel buffer and the animation,
//! decides when a frame is due, and transmits it. The main loop calls
//! [`Animator::service`] at a fixed interval; animations whose speed is slower
//! than that interval simply skip the calls that come too early.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::animation::Animation;
use crate::driver::PixelWriter;
use crate::error::{Error, Result};
use crate::pixelbuf::PixelBuf;
use crate::time::TimeSource;

/// The current state of an animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    /// Frames are drawn when due.
    Running,
    /// The strip holds the last frame; the schedule is frozen.
    Paused,
    /// The strip has been cleared. Terminal.
    Stopped,
}

/// Result of a service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceTiming {
    /// A frame was drawn and transmitted.
    Frame,
    /// Nothing to do yet; the next frame is due after this delay.
    Delay(Duration),
}

/// Drives an [`Animation`] onto a [`PixelBuf`].
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `W` - Pixel writer behind the buffer
/// * `T` - Time source implementation type
pub struct Animator<'t, W: PixelWriter, T: TimeSource> {
    pixels: PixelBuf<W>,
    animation: Box<dyn Animation>,
    time_source: &'t T,
    state: AnimatorState,
    next_update: Option<Duration>,
    pause_start_time: Option<Duration>,
    frames: u64,
}

impl<'t, W: PixelWriter, T: TimeSource> Animator<'t, W, T> {
    /// Creates a running animator. The first service call draws immediately.
    pub fn new(pixels: PixelBuf<W>, animation: Box<dyn Animation>, time_source: &'t T) -> Self {
        Self {
            pixels,
            animation,
            time_source,
            state: AnimatorState::Running,
            next_update: None,
            pause_start_time: None,
            frames: 0,
        }
    }

    /// Draws and shows a frame if one is due. When the animation asks for a
    /// clear first, a dark frame is transmitted ahead of it.
    ///
    /// Must be called from `Running` state.
    pub fn service(&mut self) -> Result<ServiceTiming> {
        if self.state != AnimatorState::Running {
            return Err(Error::InvalidState {
                expected: "Running",
                actual: self.state,
            });
        }

        let now = self.time_source.now();
        if let Some(next) = self.next_update {
            if now < next {
                return Ok(ServiceTiming::Delay(next - now));
            }
        }

        if self.animation.poll_clear(now) {
            self.pixels.clear()?;
        }

        self.animation.draw(self.pixels.pixels_mut(), now);
        self.pixels.show()?;
        self.frames += 1;
        self.next_update = Some(now + self.animation.speed());

        Ok(ServiceTiming::Frame)
    }

    /// Freezes the animation on the current frame.
    ///
    /// Must be called from `Running` state.
    pub fn pause(&mut self) -> Result<()> {
        if self.state != AnimatorState::Running {
            return Err(Error::InvalidState {
                expected: "Running",
                actual: self.state,
            });
        }

        self.pause_start_time = Some(self.time_source.now());
        self.state = AnimatorState::Paused;
        Ok(())
    }

    /// Resumes a paused animation, pushing the schedule back by the pause length.
    ///
    /// Must be called from `Paused` state.
    pub fn resume(&mut self) -> Result<ServiceTiming> {
        if self.state != AnimatorState::Paused {
            return Err(Error::InvalidState {
                expected: "Paused",
                actual: self.state,
            });
        }

        let now = self.time_source.now();
        if let (Some(pause_start), Some(next)) = (self.pause_start_time, self.next_update) {
            self.next_update = Some(next + now.saturating_sub(pause_start));
        }

        self.pause_start_time = None;
        self.state = AnimatorState::Running;
        self.service()
    }

    /// Turns the strip off.
    ///
    /// Can be called from `Running` or `Paused`.
    pub fn stop(&mut self) -> Result<()> {
        if self.state == AnimatorState::Stopped {
            return Err(Error::InvalidState {
                expected: "Running or Paused",
                actual: self.state,
            });
        }

        self.pixels.clear()?;
        self.next_update = None;
        self.pause_start_time = None;
        self.state = AnimatorState::Stopped;
        Ok(())
    }

    /// Services the animation every `interval` until `shutdown` is set, then
    /// clears the strip.
    pub fn run_until(&mut self, shutdown: &AtomicBool, interval: Duration) -> Result<()> {
        while !shutdown.load(Ordering::Relaxed) {
            self.service()?;
            thread::sleep(interval);
        }

        tracing::debug!(frames = self.frames, "shutdown requested");
        self.stop()
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    /// Number of animation frames transmitted since creation. Dark frames
    /// sent between sequence members are not counted.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn animation_name(&self) -> &'static str {
        self.animation.name()
    }

    pub fn pixels(&self) -> &PixelBuf<W> {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut PixelBuf<W> {
        &mut self.pixels
    }
}
