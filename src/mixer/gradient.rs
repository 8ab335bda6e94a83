use super::{boxed, render_child};
use crate::color::{Color, mix};
use crate::curve::Curve;
use crate::pattern::{Pattern, Render};
use crate::scratch::{Scratch, Slot, SlotAllocator};
use crate::value::Value;

/// Fades from `left` at the first pixel to `right` at the last
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gradient {
    pub left: Box<Pattern>,
    pub right: Box<Pattern>,
    pub curve: Curve,
    slot: Slot,
}

impl Gradient {
    pub fn new(left: impl Into<Pattern>, right: impl Into<Pattern>, curve: Curve) -> Self {
        Self {
            left: boxed(left),
            right: boxed(right),
            curve,
            slot: Slot::UNBOUND,
        }
    }
}

impl Render for Gradient {
    fn render(&self, scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        let len = pixels.len();
        if len == 0 {
            return;
        }
        self.left.render(scratch, pixels, time_ms);
        let buf = render_child(&self.right, scratch, self.slot, len, time_ms);
        if len == 1 {
            pixels[0] = mix(pixels[0], buf[0], self.curve.scale8(32767));
        } else {
            let last = (len - 1) as u32;
            for (i, (px, right)) in pixels.iter_mut().zip(buf.iter()).enumerate() {
                let intensity = (i as u32 * 65535 / last) as u16;
                *px = mix(*px, *right, self.curve.scale8(intensity));
            }
        }
        scratch.restore(self.slot, buf);
    }

    fn bind(&mut self, slots: &mut SlotAllocator) {
        self.slot = slots.claim(1);
        self.left.bind(slots);
        self.right.bind(slots);
    }
}

/// Shows `left` before `offset` and `right` from it onward
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Split {
    pub left: Box<Pattern>,
    pub right: Box<Pattern>,
    pub offset: Value,
}

impl Split {
    pub fn new(left: impl Into<Pattern>, right: impl Into<Pattern>, offset: Value) -> Self {
        Self {
            left: boxed(left),
            right: boxed(right),
            offset,
        }
    }
}

impl Render for Split {
    fn render(&self, scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        let len = pixels.len();
        let offset = crate::math8::clamp_len(self.offset.eval(time_ms, len), len);
        let (left, right) = pixels.split_at_mut(offset);
        if !left.is_empty() {
            self.left.render(scratch, left, time_ms);
        }
        if !right.is_empty() {
            self.right.render(scratch, right, time_ms);
        }
    }

    fn bind(&mut self, slots: &mut SlotAllocator) {
        self.left.bind(slots);
        self.right.bind(slots);
    }
}
