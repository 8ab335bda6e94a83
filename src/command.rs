//! Bounded queue of commands for the painter.
//!
//! Built on `critical-section` and `heapless::Deque` so producers on other
//! threads (or interrupt handlers) can hand patterns to the render loop
//! without blocking it.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::animation::Animation;
use crate::error::DecodeError;

/// Something the painter should do on its next tick.
#[derive(Debug, Clone)]
pub enum PainterCommand {
    /// Fade to a new animation
    SetPattern(Animation),
    /// Fade to black
    Off,
}

/// Why a command didn't make it into the queue.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("command queue is full")]
    Full(PainterCommand),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Multi-producer command queue with room for `SIZE` commands.
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<PainterCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    pub fn submit(&self, command: PainterCommand) -> Result<(), SubmitError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(SubmitError::Full)
        })
    }

    /// Decode a serialized pattern and queue it
    ///
    /// Invalid payloads are rejected here and never reach the painter.
    pub fn submit_json(&self, serialized: &[u8]) -> Result<(), SubmitError> {
        let animation = Animation::decode(serialized).inspect_err(|err| {
            tracing::warn!(%err, "rejected pattern");
        })?;
        self.submit(PainterCommand::SetPattern(animation))
    }

    /// Pop everything queued and keep only the newest command
    ///
    /// Older commands would be faded over within the same frame, so they
    /// are dropped.
    pub fn take_latest(&self) -> Option<PainterCommand> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            let latest = queue.pop_back();
            queue.clear();
            latest
        })
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle of a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn set_pattern(&self, animation: Animation) -> Result<(), SubmitError> {
        self.queue.submit(PainterCommand::SetPattern(animation))
    }

    pub fn submit_json(&self, serialized: &[u8]) -> Result<(), SubmitError> {
        self.queue.submit_json(serialized)
    }

    pub fn off(&self) -> Result<(), SubmitError> {
        self.queue.submit(PainterCommand::Off)
    }
}

/// Consumer handle of a [`CommandQueue`], held by the painter
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn take_latest(&self) -> Option<PainterCommand> {
        self.queue.take_latest()
    }
}
