//! Fixed-point lookup tables approximating a cubic bezier easing curve.
//!
//! The curve always runs from (0, 0) to (1, 1); only the two inner control
//! points are configurable, as in CSS `cubic-bezier()`.

use core::fmt;

/// Table resolution used when the caller asks for fewer than 3 steps.
pub const DEFAULT_STEPS: u16 = 32;

/// Newton-Raphson iterations used to invert x(t).
const NEWTON_ITERATIONS: usize = 5;

const REVERSE: f32 = 1.0 / 65535.0;

/// Round a float to the nearest u16, saturating at the bounds
#[inline]
pub fn float_to_u16(x: f32) -> u16 {
    libm::floorf(x + 0.5) as u16
}

/// Reference evaluation of y for a given x on the normalized curve
///
/// Inverts x(t) with a few Newton-Raphson iterations, then evaluates y(t).
pub fn cubic_bezier(x0: f32, y0: f32, x1: f32, y1: f32, x: f32) -> f32 {
    let mut t = x;
    for _ in 0..NEWTON_ITERATIONS {
        let t2 = t * t;
        let t3 = t2 * t;
        let d = 1.0 - t;
        let d2 = d * d;

        let nx = 3.0 * d2 * t * x0 + 3.0 * d * t2 * x1 + t3;
        let dxdt = 3.0 * d2 * x0 + 6.0 * d * t * (x1 - x0) + 3.0 * t2 * (1.0 - x1);
        if dxdt == 0.0 {
            break;
        }
        t -= (nx - x) / dxdt;
        if t <= 0.0 || t >= 1.0 {
            break;
        }
    }
    let t = t.clamp(0.0, 1.0);

    let t2 = t * t;
    let t3 = t2 * t;
    let d = 1.0 - t;
    let d2 = d * d;
    3.0 * d2 * t * y0 + 3.0 * d * t2 * y1 + t3
}

/// [`cubic_bezier`] over the 0..=65535 domain
pub fn cubic_bezier16(x0: f32, y0: f32, x1: f32, y1: f32, x: u16) -> u16 {
    float_to_u16(cubic_bezier(x0, y0, x1, y1, f32::from(x) * REVERSE) * 65535.0)
}

/// Sampled approximation of a bezier curve
///
/// Holds `steps` equally spaced samples plus a copy of the last one, so that
/// [`Lut::eval`] never has to special-case the upper bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lut(Vec<u16>);

impl Lut {
    /// Build the table by sampling [`cubic_bezier`] at each step
    pub fn make(x0: f32, y0: f32, x1: f32, y1: f32, steps: u16) -> Self {
        let steps = if steps < 3 { DEFAULT_STEPS } else { steps };
        let step = 1.0 / f32::from(steps - 1);
        let mut table = Vec::with_capacity(usize::from(steps) + 1);
        for i in 0..steps {
            let y = cubic_bezier(x0, y0, x1, y1, f32::from(i) * step);
            table.push(float_to_u16(y * 65535.0));
        }
        table.push(u16::MAX);
        Self(table)
    }

    /// Build the table with forward differencing
    ///
    /// Walks the curve at twice the table resolution and linearly
    /// interpolates y wherever x crosses a sample position. Cheaper than
    /// [`Lut::make`] and slightly less precise.
    pub fn make_fast(x0: f32, y0: f32, x1: f32, y1: f32, steps: u16) -> Self {
        let steps = if steps < 3 { DEFAULT_STEPS } else { steps };
        let step = 1.0 / f32::from(steps - 1);
        let mut table = vec![0u16; usize::from(steps)];

        let increments = 2 * u32::from(steps);
        let t = 1.0 / (increments - 1) as f32;
        let t2 = t * t;
        let (p1x, p1y, p2x, p2y) = (x0, y0, x1, y1);

        let mut fx = 0.0_f32;
        let mut fy = 0.0_f32;

        let mut fdx = 3.0 * p1x * t;
        let mut fdy = 3.0 * p1y * t;

        let mut fdd_per_2x = 3.0 * (-2.0 * p1x + p2x) * t2;
        let mut fdd_per_2y = 3.0 * (-2.0 * p1y + p2y) * t2;
        let mut fddx = fdd_per_2x + fdd_per_2x;
        let mut fddy = fdd_per_2y + fdd_per_2y;

        let fddd_per_2x = 3.0 * (3.0 * (p1x - p2x) + 1.0) * t2 * t;
        let fddd_per_2y = 3.0 * (3.0 * (p1y - p2y) + 1.0) * t2 * t;
        let fddd_per_6x = fddd_per_2x * (1.0 / 3.0);
        let fddd_per_6y = fddd_per_2y * (1.0 / 3.0);
        let fdddx = fddd_per_2x + fddd_per_2x;
        let fdddy = fddd_per_2y + fddd_per_2y;

        let mut j = 1usize;
        let mut fj = step;
        let (mut prev_x, mut prev_y) = (0.0_f32, 0.0_f32);
        // Degenerate control points can stall x; bail out well past t=1.
        let mut budget = 8 * increments;
        while j < table.len() && budget > 0 {
            budget -= 1;
            fx += fdx + fdd_per_2x + fddd_per_6x;
            fy += fdy + fdd_per_2y + fddd_per_6y;
            fdx += fddx + fddd_per_2x;
            fdy += fddy + fddd_per_2y;
            fddx += fdddx;
            fddy += fdddy;
            fdd_per_2x += fddd_per_2x;
            fdd_per_2y += fddd_per_2y;
            if fx > fj {
                let a = prev_y * (fx - fj);
                let b = fy * (fj - prev_x);
                let y = (a + b) / (fx - prev_x);
                table[j] = float_to_u16(y * 65535.0);
                j += 1;
                fj += step;
            }
            prev_x = fx;
            prev_y = fy;
        }
        for entry in table.iter_mut().skip(j) {
            *entry = u16::MAX;
        }
        table.push(u16::MAX);
        Self(table)
    }

    /// Interpolated y for `x`, exact at both ends of the domain
    pub fn eval(&self, x: u16) -> u16 {
        let steps = (self.0.len() - 2) as u32;
        let x = u32::from(x);
        let index = x * steps / 65535;
        let next_x = (index + 1) * 65535 / steps;
        let base_x = index * 65535 / steps;
        let a = u32::from(self.0[index as usize]) * (next_x - x);
        let b = u32::from(self.0[index as usize + 1]) * (x - base_x);
        ((a + b) / (next_x - base_x)) as u16
    }

    /// Number of samples, excluding the trailing sentinel
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }

    pub fn samples(&self) -> &[u16] {
        &self.0
    }
}

impl fmt::Display for Lut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps = self.0.len() - 2;
        f.write_str("LUT{")?;
        for (i, y) in self.0.iter().take(steps + 1).enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "({}, {})", i * 65535 / steps, y)?;
        }
        f.write_str("}")
    }
}
