use super::Render;
use crate::color::{BLACK, Color, WHITE, dim};
use crate::curve::bell;
use crate::math8::{hash, progress16};
use crate::scratch::Scratch;
use crate::value::Value;

const STAR_SEED: u64 = 0x6e69_6768_7473;
const WISH_SEED: u64 = 0x7769_7368;

/// A still sky where about a quarter of the pixels are twinkling stars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightStars {
    pub color: Color,
}

impl Default for NightStars {
    fn default() -> Self {
        Self { color: WHITE }
    }
}

/// Base brightness of the star at `index`, 0 for empty sky
fn star_intensity(index: usize) -> u8 {
    let j = hash(STAR_SEED ^ index as u64);
    if j & 0x30000 != 0x30000 {
        return 0;
    }
    // Gamma 2, capped at half brightness.
    let d = ((j & 0xff) + 1) * (((j >> 8) & 0xff) + 1);
    (((d - 1) >> 8) / 2) as u8
}

impl Render for NightStars {
    fn render(&self, _scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        let seed = Value::Rand(0).eval(time_ms, pixels.len()) as u64;
        for (i, px) in pixels.iter_mut().enumerate() {
            let base = star_intensity(i);
            if base == 0 {
                *px = BLACK;
                continue;
            }
            let k = hash(seed.rotate_left(32) ^ i as u64);
            let d = ((k & 0xf) + 1) * (((k >> 4) & 0xf) + 1);
            let level = (((d - 1) >> 4) + u32::from(base)).min(255);
            *px = dim(self.color, level as u8);
        }
    }
}

/// A shooting star crossing the strip from time to time
///
/// Each `AverageDelayMS` window holds at most one star, whose start time and
/// direction are derived from the window index so replays are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WishingStar {
    pub color: Color,
    pub duration_ms: u32,
    pub average_delay_ms: u32,
}

impl Default for WishingStar {
    fn default() -> Self {
        Self {
            color: WHITE,
            duration_ms: 0,
            average_delay_ms: 0,
        }
    }
}

impl Render for WishingStar {
    fn render(&self, _scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        let len = pixels.len();
        if self.duration_ms == 0 || len == 0 {
            return;
        }
        let window = self.average_delay_ms.max(self.duration_ms);
        let h = hash(WISH_SEED ^ u64::from(time_ms / window));
        let within = time_ms % window;
        let start = h % (window - self.duration_ms + 1);
        if within < start || within - start >= self.duration_ms {
            return;
        }
        let progress = progress16(within - start, self.duration_ms);
        let brightness = (bell(progress) >> 8) as u8;
        let head = usize::from(progress) * (len - 1) / 65535;
        let reversed = h & 0x8000_0000 != 0;
        let trail = (len / 8).max(1);
        for k in 0..=trail {
            let Some(pos) = head.checked_sub(k) else {
                break;
            };
            let fade = 255 - (k * 255 / (trail + 1)) as u8;
            let index = if reversed { len - 1 - pos } else { pos };
            pixels[index] = dim(dim(self.color, fade), brightness);
        }
    }
}
