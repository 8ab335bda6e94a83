use super::Color;

/// Approximate RGB of a visible wavelength in nanometers
///
/// Piecewise linear over 380..781nm, black outside of it.
pub const fn wavelength_to_rgb(w: i32) -> Color {
    let (r, g, b) = match w {
        i32::MIN..380 => (0, 0, 0),
        380..420 => (196 - (170 * (440 - w)) / 60, 0, 26 + (229 * (w - 380)) / 40),
        420..440 => ((0x89 * (440 - w)) / 20, 0, 255),
        440..490 => (0, 255 * (w - 440) / 50, 255),
        490..510 => (0, 255, 255 * (510 - w) / 20),
        510..580 => (255 * (w - 510) / 70, 255, 0),
        580..645 => (255, 255 * (645 - w) / 65, 0),
        645..700 => (255, 0, 0),
        700..781 => (26 + (229 * (780 - w)) / 80, 0, 0),
        _ => (0, 0, 0),
    };
    Color {
        r: r as u8,
        g: g as u8,
        b: b as u8,
    }
}
