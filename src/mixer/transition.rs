use super::{boxed, render_child};
use crate::color::{Color, mix_frame};
use crate::curve::Curve;
use crate::math8::progress16;
use crate::pattern::{Pattern, Render};
use crate::scratch::{Scratch, Slot, SlotAllocator};

/// Switches from `before` to `after` at `offset_ms`, blending over
/// `transition_ms`
///
/// `after` sees time relative to `offset_ms`, `before` sees absolute time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transition {
    pub before: Box<Pattern>,
    pub after: Box<Pattern>,
    pub offset_ms: u32,
    pub transition_ms: u32,
    pub curve: Curve,
    slot: Slot,
}

impl Transition {
    pub fn new(
        before: impl Into<Pattern>,
        after: impl Into<Pattern>,
        offset_ms: u32,
        transition_ms: u32,
        curve: Curve,
    ) -> Self {
        Self {
            before: boxed(before),
            after: boxed(after),
            offset_ms,
            transition_ms,
            curve,
            slot: Slot::UNBOUND,
        }
    }
}

impl Render for Transition {
    fn render(&self, scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        if time_ms <= self.offset_ms {
            self.before.render(scratch, pixels, time_ms);
            return;
        }
        let since = time_ms - self.offset_ms;
        self.after.render(scratch, pixels, since);
        if since >= self.transition_ms {
            // Done blending, the buffer won't be needed again.
            scratch.release(self.slot);
            return;
        }
        let buf = render_child(&self.before, scratch, self.slot, pixels.len(), time_ms);
        let intensity = progress16(since, self.transition_ms);
        mix_frame(pixels, &buf, 255 - self.curve.scale8(intensity));
        scratch.restore(self.slot, buf);
    }

    fn bind(&mut self, slots: &mut SlotAllocator) {
        self.slot = slots.claim(1);
        self.before.bind(slots);
        self.after.bind(slots);
    }
}

/// Cycles through `patterns`, showing each for `show_ms` then blending
/// into the next over `transition_ms`
///
/// Time isn't rebased, every child animates as if it had been running all
/// along.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Loop {
    pub patterns: Vec<Pattern>,
    pub show_ms: u32,
    pub transition_ms: u32,
    pub curve: Curve,
    slot: Slot,
}

impl Loop {
    pub fn new(patterns: Vec<Pattern>, show_ms: u32, transition_ms: u32, curve: Curve) -> Self {
        Self {
            patterns,
            show_ms,
            transition_ms,
            curve,
            slot: Slot::UNBOUND,
        }
    }
}

impl Render for Loop {
    fn render(&self, scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        let count = self.patterns.len() as u64;
        if count == 0 {
            return;
        }
        let cycle = u64::from(self.show_ms) + u64::from(self.transition_ms);
        if cycle == 0 {
            self.patterns[0].render(scratch, pixels, time_ms);
            return;
        }
        let number = u64::from(time_ms) / cycle;
        self.patterns[(number % count) as usize].render(scratch, pixels, time_ms);
        let within = u64::from(time_ms) - number * cycle;
        if within <= u64::from(self.show_ms) {
            return;
        }
        let next = &self.patterns[((number + 1) % count) as usize];
        let buf = render_child(next, scratch, self.slot, pixels.len(), time_ms);
        let intensity = progress16((within - u64::from(self.show_ms)) as u32, self.transition_ms);
        mix_frame(pixels, &buf, self.curve.scale8(intensity));
        scratch.restore(self.slot, buf);
    }

    fn bind(&mut self, slots: &mut SlotAllocator) {
        self.slot = slots.claim(1);
        for pattern in &mut self.patterns {
            pattern.bind(slots);
        }
    }
}
