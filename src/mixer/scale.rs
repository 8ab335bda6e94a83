use super::{boxed, render_child};
use crate::color::Color;
use crate::interpolation::Interpolation;
use crate::math8::clamp_len;
use crate::pattern::{Pattern, Render};
use crate::scratch::{Scratch, Slot, SlotAllocator};
use crate::value::Value;

/// Largest intermediate strip a Scale will render.
pub(crate) const MAX_SCALE_LEN: usize = 65536;

/// Renders the child at another length and resamples it to the strip
///
/// The intermediate length is `length` when it evaluates above zero,
/// otherwise `ratio_milli` thousandths of the strip length, rounded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scale {
    pub child: Box<Pattern>,
    pub interpolation: Interpolation,
    pub length: Value,
    pub ratio_milli: Value,
    slot: Slot,
}

impl Scale {
    pub fn new(child: impl Into<Pattern>, interpolation: Interpolation, length: Value, ratio_milli: Value) -> Self {
        Self {
            child: boxed(child),
            interpolation,
            length,
            ratio_milli,
            slot: Slot::UNBOUND,
        }
    }

    fn source_len(&self, time_ms: u32, len: usize) -> usize {
        let explicit = self.length.eval(time_ms, len);
        if explicit > 0 {
            return clamp_len(explicit, MAX_SCALE_LEN);
        }
        let ratio = i64::from(self.ratio_milli.eval(time_ms, len));
        let scaled = (ratio * len as i64 + 500) / 1000;
        clamp_len(scaled.clamp(0, MAX_SCALE_LEN as i64) as i32, MAX_SCALE_LEN)
    }
}

impl Render for Scale {
    fn render(&self, scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        let source = self.source_len(time_ms, pixels.len());
        if source == 0 || pixels.is_empty() {
            return;
        }
        let buf = render_child(&self.child, scratch, self.slot, source, time_ms);
        self.interpolation.scale(&buf, pixels);
        scratch.restore(self.slot, buf);
    }

    fn bind(&mut self, slots: &mut SlotAllocator) {
        self.slot = slots.claim(1);
        self.child.bind(slots);
    }
}
