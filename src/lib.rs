//! Composable 1D light patterns for addressable LED strips.
//!
//! A [`Pattern`] is an immutable tree of leaf patterns and mixers. Wrapping it
//! in an [`Animation`] assigns scratch buffers so the tree can be rendered
//! into a pixel slice for any point in time. Patterns round-trip through a
//! JSON format tagged with `_type`.

pub mod animation;
pub mod color;
pub mod command;
pub mod curve;
pub mod error;
pub mod interpolation;
pub mod math8;
pub mod mixer;
pub mod painter;
pub mod pattern;
pub mod scratch;
pub mod serializer;
pub mod thumbnail;
pub mod value;

pub use animation::Animation;
pub use color::{Color, Frame};
pub use command::{CommandQueue, CommandReceiver, CommandSender, PainterCommand, SubmitError};
pub use curve::{Curve, Lut};
pub use error::{DecodeError, ThumbnailError};
pub use interpolation::Interpolation;
pub use painter::{FrameResult, Painter, PainterConfig};
pub use pattern::{Pattern, PatternKind, Render};
pub use scratch::Scratch;
pub use serializer::{decode_pattern, encode_pattern, load_png};
pub use thumbnail::{ThumbnailCache, ThumbnailConfig};
pub use value::{MovePerHour, Value};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to push rendered frames to hardware.
/// The painter is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Color]);
}
