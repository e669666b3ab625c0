//! FFT engine built on rustfft (complex) and realfft (real inverse)
//!
//! Forward transforms are unnormalized; inverse transforms divide by the
//! output length so that `inverse(forward(x)) == x`.

use crate::error::{Result, SpectralError};
use num_complex::Complex64;
use realfft::RealFftPlanner;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Complex FFT engine for one transform size
pub struct FftEngine {
    /// Transform size (number of samples)
    size: usize,

    /// Forward processor
    forward: Arc<dyn Fft<f64>>,

    /// Inverse processor
    inverse: Arc<dyn Fft<f64>>,
}

impl FftEngine {
    /// Plan forward and inverse transforms of length `size`
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::<f64>::new();
        let forward = planner.plan_fft_forward(size);
        let inverse = planner.plan_fft_inverse(size);

        Self {
            size,
            forward,
            inverse,
        }
    }

    /// Forward DFT of a real signal.
    ///
    /// The signal is truncated or zero-padded to the engine size.
    pub fn forward_real(&self, signal: &[f64]) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> = signal
            .iter()
            .take(self.size)
            .map(|&x| Complex64::new(x, 0.0))
            .collect();
        buffer.resize(self.size, Complex64::new(0.0, 0.0));

        self.forward.process(&mut buffer);
        buffer
    }

    /// Forward DFT in place
    pub fn forward_inplace(&self, buffer: &mut [Complex64]) {
        self.forward.process(buffer);
    }

    /// Inverse DFT normalized by 1/N
    pub fn inverse(&self, spectrum: &[Complex64]) -> Vec<Complex64> {
        let mut buffer = spectrum.to_vec();
        buffer.resize(self.size, Complex64::new(0.0, 0.0));
        self.inverse_inplace(&mut buffer);
        buffer
    }

    /// Inverse DFT in place, normalized by 1/N
    pub fn inverse_inplace(&self, buffer: &mut [Complex64]) {
        self.inverse.process(buffer);

        let scale = 1.0 / self.size as f64;
        for c in buffer.iter_mut() {
            *c *= scale;
        }
    }

    /// Get transform size
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Inverse transform of a half spectrum (DC, positive bins, Nyquist).
///
/// `M` input coefficients produce `2·(M − 1)` real samples. The imaginary
/// parts of the DC and Nyquist terms carry no information for a real
/// signal and are ignored.
pub fn inverse_half_spectrum(half: &[Complex64]) -> Result<Vec<f64>> {
    if half.len() < 2 {
        return Err(SpectralError::SpectrumTooShort(half.len()));
    }

    let output_len = 2 * (half.len() - 1);
    let mut planner = RealFftPlanner::<f64>::new();
    let c2r = planner.plan_fft_inverse(output_len);

    let mut input = half.to_vec();
    let last = input.len() - 1;
    input[0].im = 0.0;
    input[last].im = 0.0;

    let mut output = c2r.make_output_vec();
    c2r.process(&mut input, &mut output)
        .map_err(|e| SpectralError::Fft(e.to_string()))?;

    let scale = 1.0 / output_len as f64;
    for x in output.iter_mut() {
        *x *= scale;
    }

    Ok(output)
}

/// DFT sample frequencies for `n` bins spaced `sampling_interval` apart.
///
/// Natural transform order: `[0, 1, …, ⌈n/2⌉−1, −⌊n/2⌋, …, −1] / (n·d)`.
pub fn bin_frequencies(n: usize, sampling_interval: f64) -> Vec<f64> {
    let scale = 1.0 / (n as f64 * sampling_interval);
    let positive = (n + 1) / 2;

    (0..n)
        .map(|k| {
            let signed = if k < positive {
                k as f64
            } else {
                k as f64 - n as f64
            };
            signed * scale
        })
        .collect()
}
