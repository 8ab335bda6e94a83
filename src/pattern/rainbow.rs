use super::Render;
use crate::color::{Color, wavelength_to_rgb};
use crate::scratch::{Scratch, Slot, SlotAllocator};

const WAVELENGTH_START: f32 = 380.0;
const WAVELENGTH_DELTA: f32 = 401.0;

/// The visible spectrum spread over the strip, violet first
///
/// The spectrum only depends on the strip length, so it's computed once and
/// kept in the node's scratch buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rainbow {
    slot: Slot,
}

impl Rainbow {
    pub const fn new() -> Self {
        Self { slot: Slot::UNBOUND }
    }
}

fn fill_spectrum(pixels: &mut [Color]) {
    let len = pixels.len();
    let scale = libm::log(2.0) as f32;
    let step = 1.0 / len as f32;
    for (i, px) in pixels.iter_mut().enumerate() {
        // Log scale keeps the red end from hogging the strip.
        let j = libm::log1p(f64::from((len - i - 1) as f32 * step)) as f32 / scale;
        *px = wavelength_to_rgb((WAVELENGTH_START + WAVELENGTH_DELTA * (1.0 - j)) as i32);
    }
}

impl Render for Rainbow {
    fn render(&self, scratch: &mut Scratch, pixels: &mut [Color], _time_ms: u32) {
        let mut cache = scratch.take_raw(self.slot);
        if cache.len() != pixels.len() {
            cache.reset(pixels.len());
            fill_spectrum(&mut cache);
        }
        pixels.copy_from_slice(&cache);
        scratch.restore(self.slot, cache);
    }

    fn bind(&mut self, slots: &mut SlotAllocator) {
        self.slot = slots.claim(1);
    }
}
