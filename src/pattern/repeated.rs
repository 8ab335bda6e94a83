use super::Render;
use crate::color::{Color, Frame};
use crate::scratch::Scratch;
use crate::value::MovePerHour;

/// Tiles a frame across the strip, optionally scrolling it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Repeated {
    pub frame: Frame,
    pub move_per_hour: MovePerHour,
}

impl Repeated {
    pub fn new(frame: impl Into<Frame>) -> Self {
        Self {
            frame: frame.into(),
            move_per_hour: MovePerHour::default(),
        }
    }

    pub fn with_move_per_hour(mut self, moves: i32) -> Self {
        self.move_per_hour = MovePerHour::new(moves);
        self
    }
}

impl Render for Repeated {
    fn render(&self, _scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        let n = self.frame.len();
        if n == 0 || pixels.is_empty() {
            return;
        }
        let moves = self.move_per_hour.offset(time_ms, pixels.len(), n);
        let offset = n - moves;
        for (i, px) in pixels.iter_mut().enumerate() {
            *px = self.frame[(i + offset) % n];
        }
    }
}
