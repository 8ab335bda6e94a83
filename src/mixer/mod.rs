//! Nodes that combine or transform the output of child patterns.

mod blend;
mod gradient;
mod motion;
mod scale;
mod transition;
mod window;

pub use blend::{Add, Dim, Mixer};
pub use gradient::{Gradient, Split};
pub use motion::{Chronometer, PingPong, Rotate};
pub use scale::Scale;
pub use transition::{Loop, Transition};
pub use window::{Crop, Subset};

use crate::color::Frame;
use crate::pattern::{Pattern, Render};
use crate::scratch::{Scratch, Slot};

/// Render `child` into the buffer of `slot`, sized to `len`
///
/// The caller hands the frame back with [`Scratch::restore`] once done.
fn render_child(child: &Pattern, scratch: &mut Scratch, slot: Slot, len: usize, time_ms: u32) -> Frame {
    let mut buf = scratch.take(slot, len);
    child.render(scratch, &mut buf, time_ms);
    buf
}

fn boxed(pattern: impl Into<Pattern>) -> Box<Pattern> {
    Box::new(pattern.into())
}
