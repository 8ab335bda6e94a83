mod frame;
mod hex;
mod spectrum;
mod utils;

pub use frame::Frame;
pub use hex::{format_hex, parse_hex};
pub use spectrum::wavelength_to_rgb;
pub use utils::{add, add_frame, dim, dim_frame, mix, mix_frame, rgb_from_u32};

use smart_leds::RGB8;

/// A single pixel, three 8-bit channels
pub type Color = RGB8;

pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
pub const WHITE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
};
