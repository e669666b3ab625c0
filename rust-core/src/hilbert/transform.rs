//! Analytic signal, instantaneous amplitude and phase
//!
//! The analytic signal is obtained in the frequency domain: keep DC (and the
//! Nyquist bin for even lengths), double the positive frequencies, drop the
//! negative ones, transform back.

use super::marginal::{MarginalSpectrum, MarginalSpectrumAggregator};
use crate::error::{Result, SpectralError};
use crate::render::SharedRenderer;
use crate::spectrum::FftEngine;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Hilbert analyzer configuration
#[derive(Debug, Clone)]
pub struct HilbertConfig {
    /// Make the phase continuous across ±π jumps
    pub unwrap: bool,
}

impl Default for HilbertConfig {
    fn default() -> Self {
        Self { unwrap: true }
    }
}

/// Analytic signal with its amplitude and phase traces
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticSignal {
    /// x + j·H{x}
    pub analytic: Vec<Complex64>,

    /// Instantaneous amplitude |x + j·H{x}|
    pub amplitude: Vec<f64>,

    /// Instantaneous phase, wrapped to (−π, π] or unwrapped
    pub phase: Vec<f64>,
}

/// Analytic signal via FFT
pub fn analytic_signal(signal: &[f64]) -> Result<Vec<Complex64>> {
    let n = signal.len();
    if n == 0 {
        return Err(SpectralError::EmptySignal);
    }

    let engine = FftEngine::new(n);
    let mut spectrum = engine.forward_real(signal);

    // Bins 1..⌈n/2⌉ are strictly positive frequencies
    let positive_end = (n + 1) / 2;
    for c in spectrum[1..positive_end].iter_mut() {
        *c *= 2.0;
    }
    // Even lengths keep the Nyquist bin at index n/2 as is
    let negative_start = n / 2 + 1;
    for c in spectrum[negative_start.min(n)..].iter_mut() {
        *c = Complex64::new(0.0, 0.0);
    }

    engine.inverse_inplace(&mut spectrum);
    Ok(spectrum)
}

/// Make a phase trace continuous by adding multiples of 2π wherever
/// consecutive samples jump by more than π
pub fn unwrap_phase(phase: &[f64]) -> Vec<f64> {
    let mut unwrapped = Vec::with_capacity(phase.len());
    let Some(&first) = phase.first() else {
        return unwrapped;
    };
    unwrapped.push(first);

    let mut correction = 0.0;
    for pair in phase.windows(2) {
        let delta = pair[1] - pair[0];
        let mut wrapped = (delta + PI).rem_euclid(2.0 * PI) - PI;
        if wrapped == -PI && delta > 0.0 {
            wrapped = PI;
        }
        if delta.abs() >= PI {
            correction += wrapped - delta;
        }
        unwrapped.push(pair[1] + correction);
    }

    unwrapped
}

/// Instantaneous frequency in Hz from an unwrapped phase trace.
///
/// Element `i` is the frequency over the step from sample `i` to `i + 1`.
pub fn instantaneous_frequency(phase: &[f64], sampling_interval: f64) -> Result<Vec<f64>> {
    if !(sampling_interval.is_finite() && sampling_interval > 0.0) {
        return Err(SpectralError::InvalidSamplingInterval(sampling_interval));
    }

    let scale = 1.0 / (2.0 * PI * sampling_interval);
    Ok(phase.windows(2).map(|p| (p[1] - p[0]) * scale).collect())
}

/// Hilbert transform analyzer
#[derive(Clone, Default)]
pub struct HilbertAnalyzer {
    config: HilbertConfig,
    renderer: Option<SharedRenderer>,
}

impl HilbertAnalyzer {
    /// Create new analyzer
    pub fn new(config: HilbertConfig) -> Self {
        Self {
            config,
            renderer: None,
        }
    }

    /// Render marginal spectra computed by this analyzer
    pub fn with_renderer(mut self, renderer: SharedRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Analytic signal, amplitude and phase of `signal`
    pub fn analyze(&self, signal: &[f64]) -> Result<AnalyticSignal> {
        let analytic = analytic_signal(signal)?;

        let amplitude = analytic.iter().map(|c| c.norm()).collect();
        let phase: Vec<f64> = analytic.iter().map(|c| c.im.atan2(c.re)).collect();
        let phase = if self.config.unwrap {
            unwrap_phase(&phase)
        } else {
            phase
        };

        Ok(AnalyticSignal {
            analytic,
            amplitude,
            phase,
        })
    }

    /// Marginal Hilbert spectrum of `signal`
    ///
    /// The instantaneous frequency of the step `i − 1 → i` is paired with the
    /// amplitude at sample `i`, then amplitudes are summed per frequency.
    pub fn marginal_spectrum(&self, signal: &[f64], sampling_interval: f64) -> Result<MarginalSpectrum> {
        // Frequency needs a continuous phase whatever the configuration says
        let analytic = Self::new(HilbertConfig { unwrap: true }).analyze(signal)?;

        let frequency = instantaneous_frequency(&analytic.phase, sampling_interval)?;
        let amplitude = &analytic.amplitude[1..];

        let mut aggregator = MarginalSpectrumAggregator::new();
        if let Some(renderer) = &self.renderer {
            aggregator = aggregator.with_renderer(renderer.clone());
        }
        aggregator.aggregate(amplitude, &frequency, Some(&analytic.phase))
    }

    /// Get current configuration
    pub fn config(&self) -> &HilbertConfig {
        &self.config
    }
}

/// Analytic signal, amplitude and phase, optionally unwrapped
pub fn hilb(signal: &[f64], unwrap: bool) -> Result<AnalyticSignal> {
    HilbertAnalyzer::new(HilbertConfig { unwrap }).analyze(signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cosine(cycles: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * PI * cycles * i as f64 / n as f64).cos())
            .collect()
    }

    #[test]
    fn test_real_part_is_signal() {
        let signal = vec![0.4, -1.0, 2.2, 3.0, -0.5, 0.0, 1.7];
        let analytic = analytic_signal(&signal).unwrap();

        for (x, z) in signal.iter().zip(analytic.iter()) {
            assert!((x - z.re).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cosine_becomes_complex_exponential() {
        let n = 128;
        let result = hilb(&cosine(8.0, n), false).unwrap();

        for (i, z) in result.analytic.iter().enumerate() {
            let expected = (2.0 * PI * 8.0 * i as f64 / n as f64).sin();
            assert!((z.im - expected).abs() < 1e-9, "Mismatch at {}", i);
        }
        assert!(result.amplitude.iter().all(|&a| (a - 1.0).abs() < 1e-9));
    }

    #[test]
    fn test_odd_length() {
        let n = 101;
        let result = hilb(&cosine(5.0, n), false).unwrap();

        assert_eq!(result.amplitude.len(), n);
        assert!(result.amplitude.iter().all(|&a| (a - 1.0).abs() < 1e-9));
    }

    #[test]
    fn test_wrapped_phase_range() {
        let result = hilb(&cosine(10.0, 256), false).unwrap();

        assert!(result.phase.iter().all(|&p| p > -PI - 1e-12 && p <= PI + 1e-12));
    }

    #[test]
    fn test_unwrapped_phase_is_linear() {
        let n = 256;
        let result = hilb(&cosine(10.0, n), true).unwrap();
        let step = 2.0 * PI * 10.0 / n as f64;

        for (i, pair) in result.phase.windows(2).enumerate() {
            assert!((pair[1] - pair[0] - step).abs() < 1e-9, "Jump at {}", i);
        }
    }

    #[test]
    fn test_unwrap_phase_jump() {
        let unwrapped = unwrap_phase(&[0.0, 3.0, -3.0, -2.5]);

        assert!((unwrapped[1] - 3.0).abs() < 1e-12);
        assert!((unwrapped[2] - (2.0 * PI - 3.0)).abs() < 1e-12);
        assert!((unwrapped[3] - (2.0 * PI - 2.5)).abs() < 1e-12);
    }

    #[test]
    fn test_unwrap_keeps_small_steps() {
        let phase = [0.1, 0.5, -0.3, 1.2];
        assert_eq!(unwrap_phase(&phase), phase.to_vec());
        assert!(unwrap_phase(&[]).is_empty());
    }

    #[test]
    fn test_instantaneous_frequency_of_tone() {
        let sampling_rate = 1000.0;
        let n = 1000;
        let signal = cosine(50.0, n);

        let result = hilb(&signal, true).unwrap();
        let freq = instantaneous_frequency(&result.phase, 1.0 / sampling_rate).unwrap();

        assert_eq!(freq.len(), n - 1);
        assert!(freq.iter().all(|&f| (f - 50.0).abs() < 1e-6));
    }

    #[test]
    fn test_marginal_spectrum_of_tone() {
        let n = 1000;
        let spectrum = HilbertAnalyzer::default()
            .marginal_spectrum(&cosine(50.0, n), 1e-3)
            .unwrap();

        // All energy sits next to 50 Hz
        let total: f64 = spectrum.amplitudes.iter().sum();
        assert!((total - (n - 1) as f64).abs() < 1e-5);
        assert!(spectrum.frequencies.iter().all(|&f| (f - 50.0).abs() < 1e-6));
    }

    #[test]
    fn test_empty_signal() {
        assert_eq!(hilb(&[], true), Err(SpectralError::EmptySignal));
    }

    #[test]
    fn test_single_sample() {
        let result = hilb(&[-2.0], true).unwrap();
        assert!((result.amplitude[0] - 2.0).abs() < 1e-12);
        assert!((result.phase[0].abs() - PI).abs() < 1e-12);
    }
}
