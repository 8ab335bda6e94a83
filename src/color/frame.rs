use core::fmt;
use core::ops::{Deref, DerefMut};
use core::str::FromStr;

use super::hex::{parse_rgb_digits, push_hex};
use super::{BLACK, Color};
use crate::error::DecodeError;

/// An ordered strip of pixels
///
/// Used both as a leaf pattern and as an intermediate render buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Frame(Vec<Color>);

impl Frame {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Resize to `len` pixels, all black
    pub fn reset(&mut self, len: usize) {
        self.0.clear();
        self.0.resize(len, BLACK);
    }

    pub fn into_inner(self) -> Vec<Color> {
        self.0
    }
}

impl Deref for Frame {
    type Target = [Color];

    fn deref(&self) -> &[Color] {
        &self.0
    }
}

impl DerefMut for Frame {
    fn deref_mut(&mut self) -> &mut [Color] {
        &mut self.0
    }
}

impl From<Vec<Color>> for Frame {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl<const N: usize> From<[Color; N]> for Frame {
    fn from(colors: [Color; N]) -> Self {
        Self(colors.to_vec())
    }
}

impl FromIterator<Color> for Frame {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// `L` followed by `rrggbb` per pixel
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(1 + 6 * self.0.len());
        out.push('L');
        for c in &self.0 {
            push_hex(&mut out, *c);
        }
        f.write_str(&out)
    }
}

impl FromStr for Frame {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .as_bytes()
            .strip_prefix(b"L")
            .ok_or_else(|| DecodeError::InvalidShorthand(s.to_owned()))?;
        if digits.len() % 6 != 0 {
            return Err(DecodeError::InvalidHex(s.to_owned()));
        }
        digits
            .chunks_exact(6)
            .map(|chunk| parse_rgb_digits(chunk).ok_or_else(|| DecodeError::InvalidHex(s.to_owned())))
            .collect()
    }
}
