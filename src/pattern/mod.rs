//! The node graph: leaf generators and the closed set of pattern kinds.
//!
//! Every node is stored in the [`Pattern`] enum and implements [`Render`].
//! Nodes are immutable while rendering; intermediate buffers come from the
//! caller's [`Scratch`].

mod aurore;
mod lightning;
mod rainbow;
mod repeated;
mod stars;

pub use aurore::Aurore;
pub use lightning::Lightning;
pub use rainbow::Rainbow;
pub use repeated::Repeated;
pub use stars::{NightStars, WishingStar};

use crate::color::{Color, Frame};
use crate::mixer::{
    Add, Chronometer, Crop, Dim, Gradient, Loop, Mixer, PingPong, Rotate, Scale, Split, Subset,
    Transition,
};
use crate::scratch::{Scratch, SlotAllocator};

const PATTERN_NAME_REPEATED: &str = "Repeated";
const PATTERN_NAME_AURORE: &str = "Aurore";
const PATTERN_NAME_NIGHT_STARS: &str = "NightStars";
const PATTERN_NAME_LIGHTNING: &str = "Lightning";
const PATTERN_NAME_WISHING_STAR: &str = "WishingStar";
const PATTERN_NAME_GRADIENT: &str = "Gradient";
const PATTERN_NAME_SPLIT: &str = "Split";
const PATTERN_NAME_TRANSITION: &str = "Transition";
const PATTERN_NAME_LOOP: &str = "Loop";
const PATTERN_NAME_CHRONOMETER: &str = "Chronometer";
const PATTERN_NAME_ROTATE: &str = "Rotate";
const PATTERN_NAME_PING_PONG: &str = "PingPong";
const PATTERN_NAME_CROP: &str = "Crop";
const PATTERN_NAME_SUBSET: &str = "Subset";
const PATTERN_NAME_DIM: &str = "Dim";
const PATTERN_NAME_ADD: &str = "Add";
const PATTERN_NAME_MIXER: &str = "Mixer";
const PATTERN_NAME_SCALE: &str = "Scale";

pub trait Render {
    /// Render a single frame
    ///
    /// Pixels the node doesn't cover are left untouched.
    fn render(&self, scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32);

    /// Claim scratch slots for this node and its children
    fn bind(&mut self, _slots: &mut SlotAllocator) {}
}

/// Any node of the graph
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Pattern {
    /// Renders nothing
    #[default]
    Empty,
    Color(Color),
    Frame(Frame),
    Rainbow(Rainbow),
    Repeated(Repeated),
    Aurore(Aurore),
    NightStars(NightStars),
    Lightning(Lightning),
    WishingStar(WishingStar),
    Gradient(Gradient),
    Split(Split),
    Transition(Transition),
    Loop(Loop),
    Chronometer(Chronometer),
    Rotate(Rotate),
    PingPong(PingPong),
    Crop(Crop),
    Subset(Subset),
    Dim(Dim),
    Add(Add),
    Mixer(Mixer),
    Scale(Scale),
}

/// Kinds encoded as a dictionary with a `_type` discriminator
///
/// Color, Frame and Rainbow only exist in shorthand form and have no kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Repeated,
    Aurore,
    NightStars,
    Lightning,
    WishingStar,
    Gradient,
    Split,
    Transition,
    Loop,
    Chronometer,
    Rotate,
    PingPong,
    Crop,
    Subset,
    Dim,
    Add,
    Mixer,
    Scale,
}

impl PatternKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Repeated => PATTERN_NAME_REPEATED,
            Self::Aurore => PATTERN_NAME_AURORE,
            Self::NightStars => PATTERN_NAME_NIGHT_STARS,
            Self::Lightning => PATTERN_NAME_LIGHTNING,
            Self::WishingStar => PATTERN_NAME_WISHING_STAR,
            Self::Gradient => PATTERN_NAME_GRADIENT,
            Self::Split => PATTERN_NAME_SPLIT,
            Self::Transition => PATTERN_NAME_TRANSITION,
            Self::Loop => PATTERN_NAME_LOOP,
            Self::Chronometer => PATTERN_NAME_CHRONOMETER,
            Self::Rotate => PATTERN_NAME_ROTATE,
            Self::PingPong => PATTERN_NAME_PING_PONG,
            Self::Crop => PATTERN_NAME_CROP,
            Self::Subset => PATTERN_NAME_SUBSET,
            Self::Dim => PATTERN_NAME_DIM,
            Self::Add => PATTERN_NAME_ADD,
            Self::Mixer => PATTERN_NAME_MIXER,
            Self::Scale => PATTERN_NAME_SCALE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Some(match s {
            PATTERN_NAME_REPEATED => Self::Repeated,
            PATTERN_NAME_AURORE => Self::Aurore,
            PATTERN_NAME_NIGHT_STARS => Self::NightStars,
            PATTERN_NAME_LIGHTNING => Self::Lightning,
            PATTERN_NAME_WISHING_STAR => Self::WishingStar,
            PATTERN_NAME_GRADIENT => Self::Gradient,
            PATTERN_NAME_SPLIT => Self::Split,
            PATTERN_NAME_TRANSITION => Self::Transition,
            PATTERN_NAME_LOOP => Self::Loop,
            PATTERN_NAME_CHRONOMETER => Self::Chronometer,
            PATTERN_NAME_ROTATE => Self::Rotate,
            PATTERN_NAME_PING_PONG => Self::PingPong,
            PATTERN_NAME_CROP => Self::Crop,
            PATTERN_NAME_SUBSET => Self::Subset,
            PATTERN_NAME_DIM => Self::Dim,
            PATTERN_NAME_ADD => Self::Add,
            PATTERN_NAME_MIXER => Self::Mixer,
            PATTERN_NAME_SCALE => Self::Scale,
            _ => return None,
        })
    }
}

impl Pattern {
    /// Discriminator this node is encoded with, if any
    pub const fn kind(&self) -> Option<PatternKind> {
        Some(match self {
            Self::Empty | Self::Color(_) | Self::Frame(_) | Self::Rainbow(_) => return None,
            Self::Repeated(_) => PatternKind::Repeated,
            Self::Aurore(_) => PatternKind::Aurore,
            Self::NightStars(_) => PatternKind::NightStars,
            Self::Lightning(_) => PatternKind::Lightning,
            Self::WishingStar(_) => PatternKind::WishingStar,
            Self::Gradient(_) => PatternKind::Gradient,
            Self::Split(_) => PatternKind::Split,
            Self::Transition(_) => PatternKind::Transition,
            Self::Loop(_) => PatternKind::Loop,
            Self::Chronometer(_) => PatternKind::Chronometer,
            Self::Rotate(_) => PatternKind::Rotate,
            Self::PingPong(_) => PatternKind::PingPong,
            Self::Crop(_) => PatternKind::Crop,
            Self::Subset(_) => PatternKind::Subset,
            Self::Dim(_) => PatternKind::Dim,
            Self::Add(_) => PatternKind::Add,
            Self::Mixer(_) => PatternKind::Mixer,
            Self::Scale(_) => PatternKind::Scale,
        })
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Render for Pattern {
    fn render(&self, scratch: &mut Scratch, pixels: &mut [Color], time_ms: u32) {
        match self {
            Self::Empty => {}
            Self::Color(node) => node.render(scratch, pixels, time_ms),
            Self::Frame(node) => node.render(scratch, pixels, time_ms),
            Self::Rainbow(node) => node.render(scratch, pixels, time_ms),
            Self::Repeated(node) => node.render(scratch, pixels, time_ms),
            Self::Aurore(node) => node.render(scratch, pixels, time_ms),
            Self::NightStars(node) => node.render(scratch, pixels, time_ms),
            Self::Lightning(node) => node.render(scratch, pixels, time_ms),
            Self::WishingStar(node) => node.render(scratch, pixels, time_ms),
            Self::Gradient(node) => node.render(scratch, pixels, time_ms),
            Self::Split(node) => node.render(scratch, pixels, time_ms),
            Self::Transition(node) => node.render(scratch, pixels, time_ms),
            Self::Loop(node) => node.render(scratch, pixels, time_ms),
            Self::Chronometer(node) => node.render(scratch, pixels, time_ms),
            Self::Rotate(node) => node.render(scratch, pixels, time_ms),
            Self::PingPong(node) => node.render(scratch, pixels, time_ms),
            Self::Crop(node) => node.render(scratch, pixels, time_ms),
            Self::Subset(node) => node.render(scratch, pixels, time_ms),
            Self::Dim(node) => node.render(scratch, pixels, time_ms),
            Self::Add(node) => node.render(scratch, pixels, time_ms),
            Self::Mixer(node) => node.render(scratch, pixels, time_ms),
            Self::Scale(node) => node.render(scratch, pixels, time_ms),
        }
    }

    fn bind(&mut self, slots: &mut SlotAllocator) {
        match self {
            Self::Empty
            | Self::Color(_)
            | Self::Frame(_)
            | Self::Repeated(_)
            | Self::Aurore(_)
            | Self::NightStars(_)
            | Self::Lightning(_)
            | Self::WishingStar(_) => {}
            Self::Rainbow(node) => node.bind(slots),
            Self::Gradient(node) => node.bind(slots),
            Self::Split(node) => node.bind(slots),
            Self::Transition(node) => node.bind(slots),
            Self::Loop(node) => node.bind(slots),
            Self::Chronometer(node) => node.bind(slots),
            Self::Rotate(node) => node.bind(slots),
            Self::PingPong(node) => node.bind(slots),
            Self::Crop(node) => node.bind(slots),
            Self::Subset(node) => node.bind(slots),
            Self::Dim(node) => node.bind(slots),
            Self::Add(node) => node.bind(slots),
            Self::Mixer(node) => node.bind(slots),
            Self::Scale(node) => node.bind(slots),
        }
    }
}

/// Fills every pixel
impl Render for Color {
    fn render(&self, _scratch: &mut Scratch, pixels: &mut [Color], _time_ms: u32) {
        pixels.fill(*self);
    }
}

/// Copies from the first pixel, clipped to the shorter of the two
impl Render for Frame {
    fn render(&self, _scratch: &mut Scratch, pixels: &mut [Color], _time_ms: u32) {
        let n = self.len().min(pixels.len());
        pixels[..n].copy_from_slice(&self[..n]);
    }
}

impl From<Color> for Pattern {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<Frame> for Pattern {
    fn from(frame: Frame) -> Self {
        Self::Frame(frame)
    }
}

macro_rules! impl_from_node {
    ($($node:ident),* $(,)?) => {
        $(
            impl From<$node> for Pattern {
                fn from(node: $node) -> Self {
                    Self::$node(node)
                }
            }
        )*
    };
}

impl_from_node!(
    Rainbow, Repeated, Aurore, NightStars, Lightning, WishingStar, Gradient, Split, Transition,
    Loop, Chronometer, Rotate, PingPong, Crop, Subset, Dim, Add, Mixer, Scale,
);
