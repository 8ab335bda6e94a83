//! Caller-owned render buffers.
//!
//! Nodes never own their intermediate buffers. Each node that needs one is
//! given a [`Slot`] when its tree is bound, and borrows the matching
//! [`Frame`] from a [`Scratch`] while it renders.

use crate::color::{Color, Frame};

/// Index of a scratch buffer, stable for the lifetime of a bound tree
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Slot(usize);

impl Slot {
    /// Placeholder held by nodes that haven't been bound yet
    pub const UNBOUND: Self = Self(0);

    pub const fn index(self) -> usize {
        self.0
    }

    /// The `n`-th slot of a contiguous claim starting at `self`
    pub const fn nth(self, n: usize) -> Self {
        Self(self.0 + n)
    }
}

/// Hands out slots in tree order
#[derive(Debug, Default)]
pub struct SlotAllocator {
    next: usize,
}

impl SlotAllocator {
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Reserve `count` contiguous slots
    pub fn claim(&mut self, count: usize) -> Slot {
        let first = Slot(self.next);
        self.next += count;
        first
    }

    /// Total number of slots handed out so far
    pub const fn len(&self) -> usize {
        self.next
    }

    pub const fn is_empty(&self) -> bool {
        self.next == 0
    }
}

/// Arena of per-node buffers
///
/// One arena serves one render loop. Rendering the same tree from several
/// threads needs one arena each.
#[derive(Debug, Default, Clone)]
pub struct Scratch {
    frames: Vec<Frame>,
}

impl Scratch {
    pub fn with_slots(count: usize) -> Self {
        Self {
            frames: vec![Frame::new(); count],
        }
    }

    /// Take the buffer for `slot`, reset to `len` black pixels
    ///
    /// Must be handed back with [`Scratch::restore`] so the allocation is
    /// reused by the next frame.
    pub fn take(&mut self, slot: Slot, len: usize) -> Frame {
        let mut frame = self.take_raw(slot);
        frame.reset(len);
        frame
    }

    /// Take the buffer for `slot` as it was left by the previous frame
    pub fn take_raw(&mut self, slot: Slot) -> Frame {
        match self.frames.get_mut(slot.0) {
            Some(frame) => core::mem::take(frame),
            None => Frame::new(),
        }
    }

    pub fn restore(&mut self, slot: Slot, frame: Frame) {
        if slot.0 >= self.frames.len() {
            self.frames.resize_with(slot.0 + 1, Frame::new);
        }
        self.frames[slot.0] = frame;
    }

    /// Drop the memory held by `slot`
    pub fn release(&mut self, slot: Slot) {
        if let Some(frame) = self.frames.get_mut(slot.0) {
            *frame = Frame::new();
        }
    }

    /// Pixels last restored into `slot`
    pub fn get(&self, slot: Slot) -> &[Color] {
        self.frames.get(slot.0).map_or(&[][..], |frame| &frame[..])
    }

    /// Bytes currently held across all slots
    pub fn footprint(&self) -> usize {
        self.frames.iter().map(|f| f.len() * size_of::<Color>()).sum()
    }
}
