//! Easing curves modeled on CSS transitions.

mod bezier;

use std::sync::LazyLock;

pub use bezier::{DEFAULT_STEPS, Lut, cubic_bezier, cubic_bezier16, float_to_u16};

/// Resolution of the tables backing the named ease curves.
pub const CURVE_LUT_STEPS: u16 = 18;

const CURVE_NAME_EASE: &str = "ease";
const CURVE_NAME_EASE_IN: &str = "ease-in";
const CURVE_NAME_EASE_IN_OUT: &str = "ease-in-out";
const CURVE_NAME_EASE_OUT: &str = "ease-out";
const CURVE_NAME_DIRECT: &str = "direct";
const CURVE_NAME_STEP_START: &str = "steps(1,start)";
const CURVE_NAME_STEP_MIDDLE: &str = "steps(1,middle)";
const CURVE_NAME_STEP_END: &str = "steps(1,end)";

/// Float step curves flip this close to their threshold.
const EPSILON: f32 = 1e-7;

/// Named easing curve
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Curve {
    Ease,
    EaseIn,
    EaseInOut,
    #[default]
    EaseOut,
    /// Linear mapping
    Direct,
    StepStart,
    StepMiddle,
    StepEnd,
}

struct CurveTables {
    ease: Lut,
    ease_in: Lut,
    ease_in_out: Lut,
    ease_out: Lut,
}

static TABLES: LazyLock<CurveTables> = LazyLock::new(|| CurveTables {
    ease: Lut::make(0.25, 0.1, 0.25, 1.0, CURVE_LUT_STEPS),
    ease_in: Lut::make(0.42, 0.0, 1.0, 1.0, CURVE_LUT_STEPS),
    ease_in_out: Lut::make(0.42, 0.0, 0.58, 1.0, CURVE_LUT_STEPS),
    ease_out: Lut::make(0.0, 0.0, 0.58, 1.0, CURVE_LUT_STEPS),
});

impl Curve {
    pub const ALL: [Self; 8] = [
        Self::Ease,
        Self::EaseIn,
        Self::EaseInOut,
        Self::EaseOut,
        Self::Direct,
        Self::StepStart,
        Self::StepMiddle,
        Self::StepEnd,
    ];

    /// Map `intensity` in 0..=65535 to the same range along the curve
    pub fn scale(self, intensity: u16) -> u16 {
        let tables = &*TABLES;
        match self {
            Self::Ease => tables.ease.eval(intensity),
            Self::EaseIn => tables.ease_in.eval(intensity),
            Self::EaseInOut => tables.ease_in_out.eval(intensity),
            Self::EaseOut => tables.ease_out.eval(intensity),
            Self::Direct => intensity,
            Self::StepStart => {
                if intensity < 256 {
                    0
                } else {
                    u16::MAX
                }
            }
            Self::StepMiddle => {
                if intensity < 32768 {
                    0
                } else {
                    u16::MAX
                }
            }
            Self::StepEnd => {
                if intensity >= u16::MAX - 256 {
                    u16::MAX
                } else {
                    0
                }
            }
        }
    }

    /// [`Curve::scale`] narrowed to an 8-bit blend weight
    #[inline]
    pub fn scale8(self, intensity: u16) -> u8 {
        (self.scale(intensity) >> 8) as u8
    }

    /// Float reference of [`Curve::scale`] over 0.0..=1.0
    pub fn scale_f32(self, intensity: f32) -> f32 {
        match self {
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, intensity),
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, intensity),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, intensity),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, intensity),
            Self::Direct => intensity,
            Self::StepStart => {
                if intensity < EPSILON {
                    0.0
                } else {
                    1.0
                }
            }
            Self::StepMiddle => {
                if intensity < 0.5 {
                    0.0
                } else {
                    1.0
                }
            }
            Self::StepEnd => {
                if intensity > 1.0 - EPSILON {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ease => CURVE_NAME_EASE,
            Self::EaseIn => CURVE_NAME_EASE_IN,
            Self::EaseInOut => CURVE_NAME_EASE_IN_OUT,
            Self::EaseOut => CURVE_NAME_EASE_OUT,
            Self::Direct => CURVE_NAME_DIRECT,
            Self::StepStart => CURVE_NAME_STEP_START,
            Self::StepMiddle => CURVE_NAME_STEP_MIDDLE,
            Self::StepEnd => CURVE_NAME_STEP_END,
        }
    }

    /// Parse a wire name; the empty string selects the default
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            "" => Some(Self::default()),
            CURVE_NAME_EASE => Some(Self::Ease),
            CURVE_NAME_EASE_IN => Some(Self::EaseIn),
            CURVE_NAME_EASE_IN_OUT => Some(Self::EaseInOut),
            CURVE_NAME_EASE_OUT => Some(Self::EaseOut),
            CURVE_NAME_DIRECT => Some(Self::Direct),
            CURVE_NAME_STEP_START => Some(Self::StepStart),
            CURVE_NAME_STEP_MIDDLE => Some(Self::StepMiddle),
            CURVE_NAME_STEP_END => Some(Self::StepEnd),
            _ => None,
        }
    }
}

impl serde::Serialize for Curve {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Curve {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::parse_from_str(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown curve {name:?}")))
    }
}

/// Symmetric hump built from two ease-in-out halves
///
/// 0 and 65535 map to 0, the midpoint maps to the peak.
pub fn bell(v: u16) -> u16 {
    match v {
        0 | u16::MAX => 0,
        32767 => u16::MAX,
        1..32767 => Curve::EaseInOut.scale(v * 2),
        _ => {
            let mirrored = (u32::from(u16::MAX - v) * 2 + 1).min(65535);
            Curve::EaseInOut.scale(mirrored as u16)
        }
    }
}
