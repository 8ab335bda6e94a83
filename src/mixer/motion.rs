use super::{boxed, render_child};
use crate::color::{BLACK, Color};
use crate::pattern::{Pattern, Render};
use crate::scratch::{Scratch, Slot, SlotAllocator};
use crate::value::MovePerHour;

/// Circular shift of the child, like a candy bar
///
/// Negative rates move left.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rotate {
    pub child: Box<Pattern>,
    pub move_per_hour: MovePerHour,
    slot: Slot,
}

impl Rotate {
    pub fn new(child: impl Into<Pattern>, move_per_hour: impl Into<MovePerHour>) -> Self {
        Self {
            child: boxed(child),
            move_per_hour: move_per_hour.into(),
            slot: Slot::UNBOUND,
        }
    }
}

impl Render for Rotate {
    fn render(&self, scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        let len = pixels.len();
        if len == 0 {
            return;
        }
        let buf = render_child(&self.child, scratch, self.slot, len, time_ms);
        let offset = self.move_per_hour.offset(time_ms, len, len);
        pixels[offset..].copy_from_slice(&buf[..len - offset]);
        pixels[..offset].copy_from_slice(&buf[len - offset..]);
        scratch.restore(self.slot, buf);
    }

    fn bind(&mut self, slots: &mut SlotAllocator) {
        self.slot = slots.claim(1);
        self.child.bind(slots);
    }
}

/// A ball and its trail bouncing between both ends
///
/// The child renders the trail into a buffer of `2*len-1` pixels, pixel 0
/// being the head.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PingPong {
    pub child: Box<Pattern>,
    pub move_per_hour: MovePerHour,
    slot: Slot,
}

impl PingPong {
    pub fn new(child: impl Into<Pattern>, move_per_hour: impl Into<MovePerHour>) -> Self {
        Self {
            child: boxed(child),
            move_per_hour: move_per_hour.into(),
            slot: Slot::UNBOUND,
        }
    }
}

impl Render for PingPong {
    fn render(&self, scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        let len = pixels.len();
        if len < 2 {
            // Zero-length cycle, nowhere to bounce.
            return;
        }
        let buf = render_child(&self.child, scratch, self.slot, 2 * len - 1, time_ms);
        let cycle = 2 * (len - 1);
        let pos = self.move_per_hour.offset(time_ms, len, cycle);
        if pos >= len - 1 {
            // Going back.
            let back = pos + 1 - len;
            let limit = len - back - 1;
            for (i, px) in pixels.iter_mut().enumerate() {
                *px = if i < limit {
                    buf[len - i + back - 1]
                } else {
                    buf[i - limit]
                };
            }
        } else {
            for (i, px) in pixels.iter_mut().enumerate() {
                *px = if i <= pos { buf[pos - i] } else { buf[pos + i] };
            }
        }
        scratch.restore(self.slot, buf);
    }

    fn bind(&mut self, slots: &mut SlotAllocator) {
        self.slot = slots.claim(1);
        self.child.bind(slots);
    }
}

/// Second, minute and hour hands walking along the strip
///
/// The child provides a 4 pixel palette: background, seconds, minutes,
/// hours. Where hands overlap, seconds win over minutes over hours.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chronometer {
    pub child: Box<Pattern>,
}

impl Chronometer {
    pub fn new(child: impl Into<Pattern>) -> Self {
        Self { child: boxed(child) }
    }
}

impl Render for Chronometer {
    fn render(&self, scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        let len = pixels.len();
        if len == 0 {
            return;
        }
        let mut palette = [BLACK; 4];
        self.child.render(scratch, &mut palette, time_ms);

        let seconds = (time_ms / 1000) as usize;
        let minutes = seconds / 60;
        let hours = minutes / 60;

        let sec_pos = (len * (seconds % 60) + 30) / 60;
        let min_pos = (len * (minutes % 60) + 30) / 60;
        let hour_pos = hours % len;

        for (i, px) in pixels.iter_mut().enumerate() {
            *px = if i == sec_pos {
                palette[1]
            } else if i == min_pos {
                palette[2]
            } else if i == hour_pos {
                palette[3]
            } else {
                palette[0]
            };
        }
    }

    fn bind(&mut self, slots: &mut SlotAllocator) {
        self.child.bind(slots);
    }
}
