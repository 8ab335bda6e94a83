use super::{boxed, render_child};
use crate::color::Color;
use crate::math8::clamp_len;
use crate::pattern::{Pattern, Render};
use crate::scratch::{Scratch, Slot, SlotAllocator};
use crate::value::Value;

/// Upper bound on pixels cropped from either end.
pub(crate) const MAX_CROP: usize = 1000;

/// Renders the child on a longer strip and drops pixels at both ends
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Crop {
    pub child: Box<Pattern>,
    pub before: Value,
    pub after: Value,
    slot: Slot,
}

impl Crop {
    pub fn new(child: impl Into<Pattern>, before: Value, after: Value) -> Self {
        Self {
            child: boxed(child),
            before,
            after,
            slot: Slot::UNBOUND,
        }
    }
}

impl Render for Crop {
    fn render(&self, scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        let len = pixels.len();
        let before = clamp_len(self.before.eval(time_ms, len), MAX_CROP);
        let after = clamp_len(self.after.eval(time_ms, len), MAX_CROP);
        let buf = render_child(&self.child, scratch, self.slot, len + before + after, time_ms);
        pixels.copy_from_slice(&buf[before..before + len]);
        scratch.restore(self.slot, buf);
    }

    fn bind(&mut self, slots: &mut SlotAllocator) {
        self.slot = slots.claim(1);
        self.child.bind(slots);
    }
}

/// Renders the child into a window of the strip, the rest is untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subset {
    pub child: Box<Pattern>,
    pub offset: Value,
    pub length: Value,
}

impl Subset {
    pub fn new(child: impl Into<Pattern>, offset: Value, length: Value) -> Self {
        Self {
            child: boxed(child),
            offset,
            length,
        }
    }
}

impl Render for Subset {
    fn render(&self, scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        let len = pixels.len();
        let offset = clamp_len(self.offset.eval(time_ms, len), len);
        let length = clamp_len(self.length.eval(time_ms, len), len - offset);
        if length == 0 {
            return;
        }
        self.child
            .render(scratch, &mut pixels[offset..offset + length], time_ms);
    }

    fn bind(&mut self, slots: &mut SlotAllocator) {
        self.child.bind(slots);
    }
}
