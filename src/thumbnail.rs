//! Animated previews of serialized patterns.
//!
//! A preview is a one pixel high GIF, one column per LED. Renders are cached
//! by the serialized bytes; concurrent requests for the same key share a
//! single render, while different keys render in parallel up to a budget.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::animation::Animation;
use crate::color::Frame;
use crate::error::ThumbnailError;

/// Preview settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    /// Width of the preview in pixels
    pub led_count: usize,
    /// Frames rendered per second of animation
    pub hz: u32,
    /// Length of the preview
    pub seconds: u32,
    /// Renders allowed at once, 0 means one per available CPU
    pub concurrency: usize,
    /// Finished previews kept, oldest evicted first; 0 keeps everything
    pub max_entries: usize,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            led_count: 100,
            hz: 30,
            seconds: 3,
            concurrency: 0,
            max_entries: 256,
        }
    }
}

enum Entry {
    Rendering,
    Ready(Arc<[u8]>),
}

#[derive(Default)]
struct State {
    entries: HashMap<Vec<u8>, Entry>,
    /// Keys of `Ready` entries in insertion order
    ready: VecDeque<Vec<u8>>,
    active: usize,
}

impl State {
    fn insert_ready(&mut self, key: &[u8], gif: Arc<[u8]>, max_entries: usize) {
        self.entries.insert(key.to_vec(), Entry::Ready(gif));
        self.ready.push_back(key.to_vec());
        while max_entries > 0 && self.ready.len() > max_entries {
            if let Some(oldest) = self.ready.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }
}

/// Cache of GIF previews keyed by serialized pattern
pub struct ThumbnailCache {
    config: ThumbnailConfig,
    budget: usize,
    state: Mutex<State>,
    changed: Condvar,
    renders: AtomicUsize,
}

impl ThumbnailCache {
    pub fn new(config: ThumbnailConfig) -> Self {
        let budget = match config.concurrency {
            0 => thread::available_parallelism().map_or(1, usize::from),
            n => n,
        };
        Self {
            config,
            budget,
            state: Mutex::new(State::default()),
            changed: Condvar::new(),
            renders: AtomicUsize::new(0),
        }
    }

    pub const fn config(&self) -> &ThumbnailConfig {
        &self.config
    }

    /// Number of renders actually performed, cache hits excluded
    pub fn renders(&self) -> usize {
        self.renders.load(Ordering::Relaxed)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // Entries are only mutated under the lock, a panicking holder can't
        // leave them half-written.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn wait<'a>(&self, guard: MutexGuard<'a, State>) -> MutexGuard<'a, State> {
        self.changed.wait(guard).unwrap_or_else(PoisonError::into_inner)
    }

    /// GIF preview of `serialized`, rendered at most once per distinct key
    pub fn render_preview(&self, serialized: &[u8]) -> Result<Arc<[u8]>, ThumbnailError> {
        let mut state = self.lock();
        loop {
            match state.entries.get(serialized) {
                Some(Entry::Ready(gif)) => return Ok(Arc::clone(gif)),
                Some(Entry::Rendering) => state = self.wait(state),
                None if state.active < self.budget => break,
                None => state = self.wait(state),
            }
        }
        state.entries.insert(serialized.to_vec(), Entry::Rendering);
        state.active += 1;
        drop(state);

        let result = self.render(serialized);

        let mut state = self.lock();
        state.active -= 1;
        match &result {
            Ok(gif) => {
                state.insert_ready(serialized, Arc::clone(gif), self.config.max_entries);
            }
            Err(_) => {
                state.entries.remove(serialized);
            }
        }
        drop(state);
        self.changed.notify_all();
        result
    }

    #[tracing::instrument(level = "debug", skip_all, fields(key_len = serialized.len()))]
    fn render(&self, serialized: &[u8]) -> Result<Arc<[u8]>, ThumbnailError> {
        let animation = Animation::decode(serialized)?;
        self.renders.fetch_add(1, Ordering::Relaxed);

        let width = self.config.led_count.max(1);
        let hz = self.config.hz.max(1);
        let frame_count = hz * self.config.seconds;
        // GIF delays are in centiseconds.
        let frame_cs = (100 + hz / 2) / hz;

        let mut scratch = animation.scratch();
        let mut frames: Vec<(Frame, u32)> = Vec::new();
        let mut current = Frame::new();
        for i in 0..frame_count {
            current.reset(width);
            let since = (u64::from(i) * 1000 / u64::from(hz)) as u32;
            animation.render(&mut scratch, &mut current, since);
            match frames.last_mut() {
                Some((previous, delay)) if *previous == current => *delay += frame_cs,
                _ => frames.push((current.clone(), frame_cs)),
            }
        }

        let mut out = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut out);
            encoder.set_repeat(Repeat::Infinite)?;
            for (pixels, delay_cs) in &frames {
                let mut image = RgbaImage::new(width as u32, 1);
                for (x, c) in pixels.iter().enumerate() {
                    image.put_pixel(x as u32, 0, Rgba([c.r, c.g, c.b, 255]));
                }
                let delay = Delay::from_numer_denom_ms(delay_cs * 10, 1);
                encoder.encode_frame(image::Frame::from_parts(image, 0, 0, delay))?;
            }
        }
        tracing::debug!(frames = frames.len(), bytes = out.len(), "preview rendered");
        Ok(Arc::from(out))
    }
}
