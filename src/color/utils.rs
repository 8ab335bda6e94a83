use super::Color;
use crate::math8::{dim8, mix8, qadd8};

/// Saturating per-channel sum
#[inline]
pub const fn add(a: Color, b: Color) -> Color {
    Color {
        r: qadd8(a.r, b.r),
        g: qadd8(a.g, b.g),
        b: qadd8(a.b, b.b),
    }
}

/// Blend two colors
///
/// # Arguments
/// * `a` - Base color
/// * `b` - Color mixed in
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub const fn mix(a: Color, b: Color, amount_of_b: u8) -> Color {
    Color {
        r: mix8(a.r, b.r, amount_of_b),
        g: mix8(a.g, b.g, amount_of_b),
        b: mix8(a.b, b.b, amount_of_b),
    }
}

/// Scale every channel by `intensity`
#[inline]
pub const fn dim(c: Color, intensity: u8) -> Color {
    Color {
        r: dim8(c.r, intensity),
        g: dim8(c.g, intensity),
        b: dim8(c.b, intensity),
    }
}

/// Blend `other` into `pixels`, pairwise over the shorter of the two
pub fn mix_frame(pixels: &mut [Color], other: &[Color], amount_of_b: u8) {
    for (p, o) in pixels.iter_mut().zip(other) {
        *p = mix(*p, *o, amount_of_b);
    }
}

/// Saturating add of `other` into `pixels`
pub fn add_frame(pixels: &mut [Color], other: &[Color]) {
    for (p, o) in pixels.iter_mut().zip(other) {
        *p = add(*p, *o);
    }
}

pub fn dim_frame(pixels: &mut [Color], intensity: u8) {
    for p in pixels {
        *p = dim(*p, intensity);
    }
}

/// Create a color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Color {
    Color {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
