//! Scalar parameters evaluated against time and strip length.

use crate::math8::hash;

/// Tick used by [`Value::Rand`] when none is configured.
pub const DEFAULT_RAND_TICK_MS: u32 = 16;

/// Largest rate accepted by [`MovePerHour`], one move per millisecond.
pub const MAX_MOVES_PER_HOUR: i32 = 3_600_000;

const MS_PER_HOUR: u32 = 3_600_000;

/// A pure function of (elapsed ms, output length) to an integer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Const(i32),
    /// Fraction of the output length, 16.16 fixed point (65536 is 100%)
    Percent(i32),
    /// Elapsed time shifted by a number of ms
    OpAdd(i32),
    /// Elapsed time modulo a tick; 0 evaluates to 0
    OpMod(u32),
    /// Elapsed time floored to a tick; 0 passes time through
    OpStep(u32),
    /// Pseudo-random value changing every tick; 0 means the default tick
    Rand(u32),
}

impl Default for Value {
    fn default() -> Self {
        Self::Const(0)
    }
}

impl Value {
    pub fn eval(&self, time_ms: u32, len: usize) -> i32 {
        match *self {
            Self::Const(c) => c,
            Self::Percent(p) => (len as i64 * i64::from(p) / 65536) as i32,
            Self::OpAdd(add) => (time_ms as i32).wrapping_add(add),
            Self::OpMod(0) => 0,
            Self::OpMod(tick) => (time_ms % tick) as i32,
            Self::OpStep(0) => time_ms as i32,
            Self::OpStep(tick) => (time_ms / tick * tick) as i32,
            Self::Rand(tick) => {
                let tick = if tick == 0 { DEFAULT_RAND_TICK_MS } else { tick };
                (hash(u64::from(time_ms / tick)) >> 1) as i32
            }
        }
    }
}

/// A rate of pixel moves per hour
///
/// The wrapped value is evaluated each frame and clamped to
/// ±[`MAX_MOVES_PER_HOUR`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MovePerHour(pub Value);

impl MovePerHour {
    pub const fn new(moves: i32) -> Self {
        Self(Value::Const(moves))
    }

    /// Total number of moves made by `time_ms`
    ///
    /// When `cycle` isn't zero, the result is reduced into `0..cycle`.
    pub fn eval(&self, time_ms: u32, len: usize, cycle: usize) -> i64 {
        let rate = i64::from(self.0.eval(time_ms, len).clamp(-MAX_MOVES_PER_HOUR, MAX_MOVES_PER_HOUR));
        let low = i64::from(time_ms % MS_PER_HOUR) * rate / i64::from(MS_PER_HOUR);
        let high = i64::from(time_ms / MS_PER_HOUR) * rate;
        match cycle {
            0 => low + high,
            cycle => (low + high).rem_euclid(cycle as i64),
        }
    }

    /// Position within `0..cycle`, for a non-empty cycle
    pub fn offset(&self, time_ms: u32, len: usize, cycle: usize) -> usize {
        self.eval(time_ms, len, cycle.max(1)) as usize
    }
}

impl From<i32> for MovePerHour {
    fn from(moves: i32) -> Self {
        Self::new(moves)
    }
}

impl From<Value> for MovePerHour {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
