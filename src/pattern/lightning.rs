use super::Render;
use crate::color::{Color, dim};
use crate::curve::bell;
use crate::scratch::Scratch;

/// Strobe sequence of one strike as (offset ms, level).
const STRIKE: [(u32, u8); 11] = [
    (0, 0),
    (150, 255),
    (300, 0),
    (450, 255),
    (600, 0),
    (750, 255),
    (900, 0),
    (1050, 76),
    (1200, 51),
    (1350, 26),
    (1500, 0),
];

/// A single lightning strike, bell shaped around `center`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightning {
    pub center: i32,
    pub half_width: i32,
    /// Peak intensity, 255 keeps the strobe levels as is
    pub intensity: u8,
    pub start_ms: u32,
}

impl Default for Lightning {
    fn default() -> Self {
        Self {
            center: 0,
            half_width: 0,
            intensity: 255,
            start_ms: 0,
        }
    }
}

impl Render for Lightning {
    fn render(&self, _scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        let Some(offset) = time_ms.checked_sub(self.start_ms) else {
            return;
        };
        let level = STRIKE
            .windows(2)
            .find(|w| w[1].0 > offset)
            .map_or(0, |w| w[0].1);
        let level = (u16::from(level) * u16::from(self.intensity) / 255) as u8;
        if level == 0 || pixels.is_empty() {
            return;
        }
        let left = i64::from(self.center) - i64::from(self.half_width);
        let right = i64::from(self.center) + i64::from(self.half_width);
        let width = right - left;
        if width <= 0 {
            return;
        }
        let last = pixels.len() as i64 - 1;
        let flash = Color {
            r: level,
            g: level,
            b: level,
        };
        for i in left.clamp(0, last)..right.clamp(0, last) {
            let x = ((i - left) * 65535 / width) as u16;
            pixels[i as usize] = dim(flash, (bell(x) >> 8) as u8);
        }
    }
}
