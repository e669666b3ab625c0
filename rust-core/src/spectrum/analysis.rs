//! High-level spectrum analyzer
//!
//! Normalized power spectrum, fundamental frequency and spectrum
//! reconstruction for one buffered window of samples.

use super::fft::{bin_frequencies, inverse_half_spectrum, FftEngine};
use crate::error::{validate_signal, Result, SpectralError};
use num_complex::Complex64;

/// Spectrum analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Time between consecutive samples in seconds
    pub sampling_interval: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sampling_interval: 1.0,
        }
    }
}

impl AnalyzerConfig {
    /// Configuration for a sampling rate given in Hz
    pub fn from_sampling_rate(sampling_rate: f64) -> Self {
        Self {
            sampling_interval: 1.0 / sampling_rate,
        }
    }
}

/// Power spectrum in ascending frequency order
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSpectrum {
    /// Bin frequencies in Hz, negative to positive
    pub frequencies: Vec<f64>,

    /// |X[k]/N|² aligned with `frequencies`
    pub power: Vec<f64>,

    /// Absolute frequency of the strongest bin
    pub fundamental_frequency: f64,
}

impl PowerSpectrum {
    /// Number of bins
    pub fn len(&self) -> usize {
        self.power.len()
    }

    pub fn is_empty(&self) -> bool {
        self.power.is_empty()
    }

    /// Largest power value (0.0 for an empty spectrum)
    pub fn max_power(&self) -> f64 {
        self.power.iter().copied().fold(0.0, f64::max)
    }
}

/// How the coefficients passed to [`compute_ifft`] are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReconstructionMode {
    /// DC, positive-frequency terms, then the combined Nyquist term.
    /// Negative frequencies are implied by conjugate symmetry.
    #[default]
    HalfSpectrum,

    /// All N coefficients in natural transform order
    FullSpectrum,
}

/// Spectrum analyzer for buffered windows
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Compute the normalized power spectrum and fundamental frequency
    ///
    /// # Arguments
    /// * `signal` - Input samples (N ≥ 1)
    ///
    /// # Returns
    /// Frequencies and power sorted by ascending frequency, and the absolute
    /// frequency of the first maximum of the power spectrum
    pub fn compute_fft(&self, signal: &[f64]) -> Result<PowerSpectrum> {
        validate_signal(signal, self.config.sampling_interval)?;

        let n = signal.len();
        let engine = FftEngine::new(n);
        let spectrum = engine.forward_real(signal);

        let scale = 1.0 / n as f64;
        let power: Vec<f64> = spectrum.iter().map(|&c| (c * scale).norm_sqr()).collect();
        let frequencies = bin_frequencies(n, self.config.sampling_interval);

        // Located in natural bin order, before reindexing
        let fundamental_frequency = frequencies[first_argmax(&power)].abs();

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| frequencies[a].total_cmp(&frequencies[b]));

        Ok(PowerSpectrum {
            frequencies: order.iter().map(|&i| frequencies[i]).collect(),
            power: order.iter().map(|&i| power[i]).collect(),
            fundamental_frequency,
        })
    }

    /// Frequency of the strongest spectral component
    pub fn compute_fundamental_frequency(&self, signal: &[f64]) -> Result<f64> {
        Ok(self.compute_fft(signal)?.fundamental_frequency)
    }

    /// Update configuration
    pub fn update_config(&mut self, config: AnalyzerConfig) {
        self.config = config;
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Nyquist frequency for the configured sampling interval
    pub fn nyquist(&self) -> f64 {
        0.5 / self.config.sampling_interval
    }
}

/// Index of the first maximum; NaN never wins
fn first_argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] || values[best].is_nan() {
            best = i;
        }
    }
    best
}

/// Normalized power spectrum of `signal` sampled every `sampling_interval` s
pub fn compute_fft(signal: &[f64], sampling_interval: f64) -> Result<PowerSpectrum> {
    SpectrumAnalyzer::new(AnalyzerConfig { sampling_interval }).compute_fft(signal)
}

/// Frequency with maximum power
pub fn compute_fundamental_frequency(signal: &[f64], sampling_interval: f64) -> Result<f64> {
    SpectrumAnalyzer::new(AnalyzerConfig { sampling_interval }).compute_fundamental_frequency(signal)
}

/// Reconstruct a real signal from the real and imaginary parts of a spectrum
///
/// # Arguments
/// * `real` - Real parts of the coefficients
/// * `imag` - Imaginary parts, same length as `real`
/// * `mode` - Layout of the coefficients
///
/// # Returns
/// The real part of the inverse transform. A half spectrum of M terms yields
/// `2·(M − 1)` samples; a full spectrum of N terms yields N samples.
pub fn compute_ifft(real: &[f64], imag: &[f64], mode: ReconstructionMode) -> Result<Vec<f64>> {
    if real.len() != imag.len() {
        return Err(SpectralError::LengthMismatch {
            expected: real.len(),
            actual: imag.len(),
        });
    }
    if real.is_empty() {
        return Err(SpectralError::EmptySpectrum);
    }

    let spectrum: Vec<Complex64> = real
        .iter()
        .zip(imag.iter())
        .map(|(&re, &im)| Complex64::new(re, im))
        .collect();

    match mode {
        ReconstructionMode::HalfSpectrum => inverse_half_spectrum(&spectrum),
        ReconstructionMode::FullSpectrum => {
            let engine = FftEngine::new(spectrum.len());
            Ok(engine.inverse(&spectrum).iter().map(|c| c.re).collect())
        }
    }
}
