//! `#rrggbb` text form shared by colors and frames.

use core::fmt::Write;

use super::{Color, dim};
use crate::error::DecodeError;

#[inline]
const fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn byte_at(digits: &[u8], index: usize) -> Option<u8> {
    let hi = nibble(*digits.get(index)?)?;
    let lo = nibble(*digits.get(index + 1)?)?;
    Some((hi << 4) | lo)
}

/// Decode six hex digits (no prefix) into a color
pub(crate) fn parse_rgb_digits(digits: &[u8]) -> Option<Color> {
    if digits.len() != 6 {
        return None;
    }
    Some(Color {
        r: byte_at(digits, 0)?,
        g: byte_at(digits, 2)?,
        b: byte_at(digits, 4)?,
    })
}

/// Parse `#rrggbb`, or `#rrggbbaa` with the alpha premultiplied
pub fn parse_hex(s: &str) -> Result<Color, DecodeError> {
    let invalid = || DecodeError::InvalidHex(s.to_owned());
    let digits = s.as_bytes().strip_prefix(b"#").ok_or_else(invalid)?;
    match digits.len() {
        6 => parse_rgb_digits(digits).ok_or_else(invalid),
        8 => {
            let rgb = parse_rgb_digits(&digits[..6]).ok_or_else(invalid)?;
            let alpha = byte_at(digits, 6).ok_or_else(invalid)?;
            Ok(if alpha == 255 { rgb } else { dim(rgb, alpha) })
        }
        _ => Err(invalid()),
    }
}

pub(crate) fn push_hex(out: &mut String, c: Color) {
    // Writing into a String can't fail.
    let _ = write!(out, "{:02x}{:02x}{:02x}", c.r, c.g, c.b);
}

/// Lowercase `#rrggbb`
pub fn format_hex(c: Color) -> String {
    let mut out = String::with_capacity(7);
    out.push('#');
    push_hex(&mut out, c);
    out
}
