//! Frame pump driving an animation onto an LED strip.
//!
//! Portable frame pacing without async: the caller sleeps between ticks for
//! the duration returned by [`Painter::tick`].

use embassy_time::{Duration, Instant};
use serde::{Deserialize, Serialize};

use crate::OutputDriver;
use crate::animation::Animation;
use crate::color::{BLACK, Frame, mix_frame};
use crate::command::{CommandReceiver, PainterCommand};
use crate::curve::Curve;
use crate::math8::progress16;
use crate::scratch::Scratch;

/// Default target frame rate (90 FPS).
pub const DEFAULT_FPS: u32 = 90;

/// Default fade between two animations.
pub const DEFAULT_FADE_MS: u32 = 500;

/// Painter settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PainterConfig {
    pub led_count: usize,
    pub fps: u32,
    /// Cross-fade duration when the animation changes
    pub fade_ms: u32,
    pub fade_curve: Curve,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            led_count: 0,
            fps: DEFAULT_FPS,
            fade_ms: DEFAULT_FADE_MS,
            fade_curve: Curve::default(),
        }
    }
}

impl PainterConfig {
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps.max(1)))
    }
}

/// Result of a frame tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// An animation with its own arena and activation time
struct Layer {
    animation: Animation,
    scratch: Scratch,
    activated: Instant,
}

impl Layer {
    fn new(animation: Animation, now: Instant) -> Self {
        Self {
            scratch: animation.scratch(),
            animation,
            activated: now,
        }
    }

    fn render(&mut self, pixels: &mut [crate::color::Color], now: Instant) {
        pixels.fill(BLACK);
        let elapsed = now.saturating_duration_since(self.activated).as_millis();
        // Patterns work on wrapping 32-bit milliseconds.
        self.animation.render(&mut self.scratch, pixels, elapsed as u32);
    }
}

/// Owns the strip buffer and cross-fades between animations
///
/// Each animation sees time relative to its own activation, so its first
/// frame always renders at 0 ms.
pub struct Painter<'a, O: OutputDriver, const QUEUE: usize> {
    output: O,
    commands: CommandReceiver<'a, QUEUE>,
    config: PainterConfig,
    current: Layer,
    previous: Option<Layer>,
    frame: Frame,
    spare: Frame,
    next_frame: Instant,
}

impl<'a, O: OutputDriver, const QUEUE: usize> Painter<'a, O, QUEUE> {
    pub fn new(output: O, commands: CommandReceiver<'a, QUEUE>, config: PainterConfig) -> Self {
        let start = Instant::from_millis(0);
        let mut frame = Frame::new();
        frame.reset(config.led_count);
        Self {
            output,
            commands,
            config,
            current: Layer::new(Animation::default(), start),
            previous: None,
            spare: frame.clone(),
            frame,
            next_frame: start,
        }
    }

    /// Fade from whatever is showing to `animation`, starting at `now`
    pub fn set_animation(&mut self, animation: Animation, now: Instant) {
        tracing::info!(slots = animation.slot_count(), "activating pattern");
        let incoming = Layer::new(animation, now);
        let outgoing = core::mem::replace(&mut self.current, incoming);
        self.previous = (self.config.fade_ms > 0).then_some(outgoing);
    }

    pub fn animation(&self) -> &Animation {
        &self.current.animation
    }

    pub fn is_fading(&self) -> bool {
        self.previous.is_some()
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Pixels written by the last tick
    pub fn frame(&self) -> &[crate::color::Color] {
        &self.frame
    }

    fn process_commands(&mut self, now: Instant) {
        match self.commands.take_latest() {
            Some(PainterCommand::SetPattern(animation)) => self.set_animation(animation, now),
            Some(PainterCommand::Off) => self.set_animation(Animation::default(), now),
            None => {}
        }
    }

    fn render(&mut self, now: Instant) {
        self.current.render(&mut self.frame, now);
        let Some(previous) = self.previous.as_mut() else {
            return;
        };
        let since = now
            .saturating_duration_since(self.current.activated)
            .as_millis()
            .min(u64::from(u32::MAX)) as u32;
        if since >= self.config.fade_ms {
            tracing::debug!("fade complete");
            self.previous = None;
            return;
        }
        previous.render(&mut self.spare, now);
        let progress = progress16(since, self.config.fade_ms);
        mix_frame(&mut self.frame, &self.spare, 255 - self.config.fade_curve.scale8(progress));
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let frame_duration = self.config.frame_duration();
        // Falling more than two frames behind resets the schedule instead of
        // bursting to catch up.
        let max_drift = frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        self.process_commands(now);
        self.render(now);
        self.output.write(&self.frame);

        self.next_frame += frame_duration;
        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_ticks(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }
}
