//! Fixed-point helpers for 8-bit channels and 16-bit intensities.

/// Dim an 8-bit channel by an intensity (0 is dark, 255 keeps most of the value)
#[inline]
pub const fn dim8(value: u8, intensity: u8) -> u8 {
    let i = intensity as u16;
    ((value as u16 * i + (i >> 1)) >> 8) as u8
}

/// Blend two 8-bit channels, `amount_of_b` 0 keeps `a`, 255 yields `b`
#[inline]
pub const fn mix8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let grad = amount_of_b as u16;
    (((a as u16 + 1) * (255 - grad) + (b as u16 + 1) * grad) >> 8) as u8
}

/// Saturating add of two 8-bit channels
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Progress of `elapsed` within `duration` on the 0..=65535 scale
///
/// Uses a 64-bit intermediate so that long durations can't overflow.
#[inline]
pub const fn progress16(elapsed: u32, duration: u32) -> u16 {
    if duration == 0 || elapsed >= duration {
        return u16::MAX;
    }
    (elapsed as u64 * 65535 / duration as u64) as u16
}

/// Clamp an integer into `0..=max`
#[inline]
pub fn clamp_len(value: i32, max: usize) -> usize {
    if value <= 0 {
        0
    } else {
        (value as usize).min(max)
    }
}

/// SplitMix64 finalizer, folded to 32 bits
///
/// Deterministic and cheap, used wherever a pattern needs reproducible noise.
#[inline]
pub const fn hash(mut x: u64) -> u32 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^= x >> 31;
    (x >> 32) as u32
}
