//! IIR filter application
//!
//! Direct Form II transposed, with causal (`lfilter`) and zero-phase
//! forward-backward (`filtfilt`) helpers on top.

use super::design::IirCoefficients;

/// Stateful IIR filter (Direct Form II transposed)
pub struct IirFilter {
    /// Numerator coefficients, padded to `a.len()` and normalized by a[0]
    b: Vec<f64>,

    /// Denominator coefficients, normalized so a[0] == 1
    a: Vec<f64>,

    /// Delay line, length = max(len(a), len(b)) − 1
    state: Vec<f64>,
}

impl IirFilter {
    /// Create a filter with zero initial state
    pub fn new(coeffs: &IirCoefficients) -> Self {
        let taps = coeffs.b.len().max(coeffs.a.len()).max(1);
        let a0 = coeffs.a.first().copied().unwrap_or(1.0);

        let mut b = vec![0.0; taps];
        let mut a = vec![0.0; taps];
        for (dst, &src) in b.iter_mut().zip(coeffs.b.iter()) {
            *dst = src / a0;
        }
        for (dst, &src) in a.iter_mut().zip(coeffs.a.iter()) {
            *dst = src / a0;
        }

        Self {
            b,
            a,
            state: vec![0.0; taps - 1],
        }
    }

    /// Replace the delay line contents
    ///
    /// # Note
    /// Values beyond the delay line length are ignored; missing ones are zero.
    pub fn set_state(&mut self, state: &[f64]) {
        self.state.fill(0.0);
        for (dst, &src) in self.state.iter_mut().zip(state.iter()) {
            *dst = src;
        }
    }

    /// Process single sample
    #[inline]
    pub fn process_sample(&mut self, input: f64) -> f64 {
        let order = self.state.len();
        let output = self.b[0] * input + self.state.first().copied().unwrap_or(0.0);

        for i in 0..order {
            let next = if i + 1 < order { self.state[i + 1] } else { 0.0 };
            self.state[i] = self.b[i + 1] * input - self.a[i + 1] * output + next;
        }

        output
    }

    /// Process a block of samples
    pub fn process_block(&mut self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&x| self.process_sample(x)).collect()
    }

    /// Reset filter state (clear delay line)
    pub fn reset(&mut self) {
        self.state.fill(0.0);
    }

    /// Length of the delay line
    pub fn state_len(&self) -> usize {
        self.state.len()
    }
}

/// Causal filtering from zero initial state
pub fn lfilter(coeffs: &IirCoefficients, data: &[f64]) -> Vec<f64> {
    IirFilter::new(coeffs).process_block(data)
}

/// Initial delay-line state matching the step response steady state
pub fn lfilter_zi(coeffs: &IirCoefficients) -> Vec<f64> {
    let filter = IirFilter::new(coeffs);
    let (b, a) = (&filter.b, &filter.a);
    let n = filter.state_len();
    if n == 0 {
        return Vec::new();
    }

    let b_sum: f64 = (1..=n).map(|k| b[k] - a[k] * b[0]).sum();
    let a_sum: f64 = a.iter().sum();

    let mut zi = vec![0.0; n];
    zi[0] = b_sum / a_sum;

    let mut asum = 1.0;
    let mut csum = 0.0;
    for k in 1..n {
        asum += a[k];
        csum += b[k] - a[k] * b[0];
        zi[k] = asum * zi[0] - csum;
    }

    zi
}

/// Odd extension of `data` by `edge` samples on both ends
fn odd_extension(data: &[f64], edge: usize) -> Vec<f64> {
    let n = data.len();
    let first = data[0];
    let last = data[n - 1];

    let mut extended = Vec::with_capacity(n + 2 * edge);
    extended.extend((1..=edge).rev().map(|i| 2.0 * first - data[i]));
    extended.extend_from_slice(data);
    extended.extend((1..=edge).map(|i| 2.0 * last - data[n - 1 - i]));
    extended
}

/// Zero-phase forward-backward filtering
///
/// The signal is padded by odd extension of `3 · taps` samples (fewer when
/// the signal is shorter) and each pass starts from the steady state scaled by
/// its first sample, so edges do not ring.
pub fn filtfilt(coeffs: &IirCoefficients, data: &[f64]) -> Vec<f64> {
    let n = data.len();
    if n == 0 {
        return Vec::new();
    }

    let taps = coeffs.a.len().max(coeffs.b.len());
    let edge = (3 * taps).min(n - 1);

    let extended = odd_extension(data, edge);
    let zi = lfilter_zi(coeffs);

    let mut filter = IirFilter::new(coeffs);
    let scaled: Vec<f64> = zi.iter().map(|z| z * extended[0]).collect();
    filter.set_state(&scaled);
    let mut forward = filter.process_block(&extended);

    forward.reverse();
    let start = forward[0];
    let scaled: Vec<f64> = zi.iter().map(|z| z * start).collect();
    filter.set_state(&scaled);
    let mut backward = filter.process_block(&forward);
    backward.reverse();

    backward[edge..edge + n].to_vec()
}
