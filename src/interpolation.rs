//! Resampling a pixel strip to a different length.

use crate::color::{Color, mix};

const INTERPOLATION_NAME_NEAREST_SKIP: &str = "nearestskip";
const INTERPOLATION_NAME_NEAREST: &str = "nearest";
const INTERPOLATION_NAME_LINEAR: &str = "linear";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interpolation {
    /// Nearest pixel; when upscaling, pixels without a source are left alone
    NearestSkip,
    /// Nearest pixel, blocky
    #[default]
    Nearest,
    /// Nearest pixel blended half and half with its right neighbour
    Linear,
}

impl Interpolation {
    /// Resample `input` into `output`
    pub fn scale(self, input: &[Color], output: &mut [Color]) {
        let li = input.len();
        let lo = output.len();
        if li == 0 || lo == 0 {
            return;
        }
        match self {
            Self::NearestSkip if li < lo => {
                for (i, p) in input.iter().enumerate() {
                    if let Some(slot) = output.get_mut((i * lo + lo / 2) / li) {
                        *slot = *p;
                    }
                }
            }
            Self::NearestSkip | Self::Nearest => {
                for (i, out) in output.iter_mut().enumerate() {
                    *out = input[((i * li + li / 2) / lo).min(li - 1)];
                }
            }
            Self::Linear => {
                for (i, out) in output.iter_mut().enumerate() {
                    let x = ((i * li + li / 2) / lo).min(li - 1);
                    *out = match input.get(x + 1) {
                        Some(next) => mix(input[x], *next, 127),
                        None => input[x],
                    };
                }
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NearestSkip => INTERPOLATION_NAME_NEAREST_SKIP,
            Self::Nearest => INTERPOLATION_NAME_NEAREST,
            Self::Linear => INTERPOLATION_NAME_LINEAR,
        }
    }

    /// Parse a wire name; the empty string selects the default
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            "" | INTERPOLATION_NAME_NEAREST => Some(Self::Nearest),
            INTERPOLATION_NAME_NEAREST_SKIP => Some(Self::NearestSkip),
            INTERPOLATION_NAME_LINEAR => Some(Self::Linear),
            _ => None,
        }
    }
}
