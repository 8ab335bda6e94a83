//! A bound node tree, ready to render.

use crate::color::Color;
use crate::error::DecodeError;
use crate::pattern::{Pattern, Render};
use crate::scratch::{Scratch, SlotAllocator};
use crate::serializer;

/// A pattern tree whose nodes have been assigned their scratch slots
///
/// The tree itself is immutable; all per-frame state lives in a [`Scratch`]
/// owned by whoever drives the render loop, so an `Animation` can be shared
/// between threads as long as each has its own scratch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Animation {
    root: Pattern,
    slots: usize,
}

impl Animation {
    pub fn new(mut root: Pattern) -> Self {
        let mut slots = SlotAllocator::new();
        root.bind(&mut slots);
        Self {
            root,
            slots: slots.len(),
        }
    }

    /// Decode and bind a serialized tree
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        serializer::decode_pattern(bytes).map(Self::new)
    }

    pub fn encode(&self) -> String {
        serializer::encode_pattern(&self.root)
    }

    /// A scratch arena sized for this tree
    pub fn scratch(&self) -> Scratch {
        Scratch::with_slots(self.slots)
    }

    /// Render the frame at `time_ms` since activation
    pub fn render(&self, scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        self.root.render(scratch, pixels, time_ms);
    }

    pub fn pattern(&self) -> &Pattern {
        &self.root
    }

    pub fn into_pattern(self) -> Pattern {
        self.root
    }

    pub fn slot_count(&self) -> usize {
        self.slots
    }
}

impl From<Pattern> for Animation {
    fn from(pattern: Pattern) -> Self {
        Self::new(pattern)
    }
}
