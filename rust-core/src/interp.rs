//! Piecewise-linear interpolation over sampled points

use crate::error::{Result, SpectralError};

/// What to return for abscissas outside the sampled range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfBounds {
    /// 0.0 on both sides
    #[default]
    Zero,

    /// Extend the first and last segments
    Extrapolate,
}

/// Linear interpolator built from `(x, y)` points
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    x: Vec<f64>,
    y: Vec<f64>,
    out_of_bounds: OutOfBounds,
}

impl LinearInterpolator {
    /// Value at `at`
    pub fn evaluate(&self, at: f64) -> f64 {
        let n = self.x.len();

        if self.out_of_bounds == OutOfBounds::Zero && (at < self.x[0] || at > self.x[n - 1]) {
            return 0.0;
        }

        // Segment [lo, hi] containing `at`, or the outermost one
        let hi = self.x.partition_point(|&v| v < at).clamp(1, n - 1);
        let lo = hi - 1;

        let dx = self.x[hi] - self.x[lo];
        if dx == 0.0 {
            return self.y[hi];
        }
        self.y[lo] + (at - self.x[lo]) * (self.y[hi] - self.y[lo]) / dx
    }

    /// Values at every abscissa in `xs`
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Borrow as a plain closure
    pub fn as_fn(&self) -> impl Fn(f64) -> f64 + '_ {
        move |x| self.evaluate(x)
    }

    /// Sampled range `(min x, max x)`
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    pub fn out_of_bounds(&self) -> OutOfBounds {
        self.out_of_bounds
    }
}

/// Build a linear interpolator through `(x[i], y[i])`
///
/// Points may come in any order; they are sorted by `x`.
///
/// # Errors
/// `LengthMismatch` when `x` and `y` differ in length, `TooFewPoints` for
/// fewer than two points, `NonFiniteAbscissa` for NaN or infinite `x`.
pub fn interp(x: &[f64], y: &[f64], out_of_bounds: OutOfBounds) -> Result<LinearInterpolator> {
    if x.len() != y.len() {
        return Err(SpectralError::LengthMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(SpectralError::TooFewPoints(x.len()));
    }
    if let Some(index) = x.iter().position(|v| !v.is_finite()) {
        return Err(SpectralError::NonFiniteAbscissa(index));
    }

    let mut order: Vec<usize> = (0..x.len()).collect();
    order.sort_by(|&a, &b| x[a].total_cmp(&x[b]));

    Ok(LinearInterpolator {
        x: order.iter().map(|&i| x[i]).collect(),
        y: order.iter().map(|&i| y[i]).collect(),
        out_of_bounds,
    })
}
