use super::Render;
use crate::color::Color;
use crate::scratch::Scratch;

#[inline]
fn sin(x: f32) -> f32 {
    libm::sin(f64::from(x)) as f32
}

#[inline]
fn hypot(x: f32, y: f32) -> f32 {
    libm::hypot(f64::from(x), f64::from(y)) as f32
}

/// Slow green ripples, loosely like an aurora
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aurore;

impl Render for Aurore {
    fn render(&self, _scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        let y = time_ms as f32 * 0.01;
        for (i, px) in pixels.iter_mut().enumerate() {
            let x = i as f32;
            let level = (32.0 + 31.0 * sin(hypot(200.0 - y, 320.0 - x) / 16.0))
                * (0.5 + 0.5 * sin(y * 0.1));
            *px = Color {
                r: 0,
                g: level as u8,
                b: 0,
            };
        }
    }
}
