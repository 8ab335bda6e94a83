use super::{boxed, render_child};
use crate::color::{Color, add_frame, dim_frame};
use crate::math8::clamp_len;
use crate::pattern::{Pattern, Render};
use crate::scratch::{Scratch, Slot, SlotAllocator};
use crate::value::Value;

/// Scales the child's brightness, 0 is dark and 255 keeps it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dim {
    pub child: Box<Pattern>,
    pub intensity: Value,
}

impl Dim {
    pub fn new(child: impl Into<Pattern>, intensity: Value) -> Self {
        Self {
            child: boxed(child),
            intensity,
        }
    }
}

impl Render for Dim {
    fn render(&self, scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        self.child.render(scratch, pixels, time_ms);
        let intensity = clamp_len(self.intensity.eval(time_ms, pixels.len()), 255);
        dim_frame(pixels, intensity as u8);
    }

    fn bind(&mut self, slots: &mut SlotAllocator) {
        self.child.bind(slots);
    }
}

/// Saturating sum of every child on top of the current pixels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Add {
    pub patterns: Vec<Pattern>,
    slot: Slot,
}

impl Add {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self {
            patterns,
            slot: Slot::UNBOUND,
        }
    }
}

impl Render for Add {
    fn render(&self, scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        for pattern in &self.patterns {
            let buf = render_child(pattern, scratch, self.slot, pixels.len(), time_ms);
            add_frame(pixels, &buf);
            scratch.restore(self.slot, buf);
        }
    }

    fn bind(&mut self, slots: &mut SlotAllocator) {
        self.slot = slots.claim(1);
        for pattern in &mut self.patterns {
            pattern.bind(slots);
        }
    }
}

/// Weighted sum of children, saturating per channel
///
/// A weight of 255 adds the child at full strength. `patterns` and
/// `weights` must have the same length, otherwise nothing is rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mixer {
    pub patterns: Vec<Pattern>,
    pub weights: Vec<u8>,
    slot: Slot,
}

impl Mixer {
    pub fn new(patterns: Vec<Pattern>, weights: Vec<u8>) -> Self {
        Self {
            patterns,
            weights,
            slot: Slot::UNBOUND,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.patterns.len() == self.weights.len()
    }
}

impl Render for Mixer {
    fn render(&self, scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        if !self.is_consistent() {
            tracing::trace!(
                patterns = self.patterns.len(),
                weights = self.weights.len(),
                "mixer skipped"
            );
            return;
        }
        let len = pixels.len();
        for (i, pattern) in self.patterns.iter().enumerate() {
            let slot = self.slot.nth(i);
            let buf = render_child(pattern, scratch, slot, len, time_ms);
            scratch.restore(slot, buf);
        }
        for (p, px) in pixels.iter_mut().enumerate() {
            let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
            for (i, weight) in self.weights.iter().enumerate() {
                let Some(c) = scratch.get(self.slot.nth(i)).get(p) else {
                    continue;
                };
                let w = u32::from(*weight);
                r += u32::from(c.r) * w;
                g += u32::from(c.g) * w;
                b += u32::from(c.b) * w;
            }
            *px = Color {
                r: (r / 255).min(255) as u8,
                g: (g / 255).min(255) as u8,
                b: (b / 255).min(255) as u8,
            };
        }
    }

    fn bind(&mut self, slots: &mut SlotAllocator) {
        if !self.is_consistent() {
            tracing::warn!(
                patterns = self.patterns.len(),
                weights = self.weights.len(),
                "mixer has mismatched patterns and weights, it will render nothing"
            );
        }
        self.slot = slots.claim(self.patterns.len());
        for pattern in &mut self.patterns {
            pattern.bind(slots);
        }
    }
}
