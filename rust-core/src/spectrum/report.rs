//! Plot-ready spectrum report
//!
//! Power spectrum plus the peaks standing above a fraction of the maximum.

use super::analysis::{AnalyzerConfig, SpectrumAnalyzer};
use super::peaks::{LocalMaximaPeakFinder, PeakFinder};
use crate::error::Result;
use std::sync::Arc;

/// Default divisor applied to the maximum power to get the peak threshold
pub const DEFAULT_THRESHOLD_DIVISOR: f64 = 4.0;

/// Spectrum, peaks and fundamental frequency of one signal window
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumReport {
    /// Bin frequencies in Hz, ascending
    pub frequencies: Vec<f64>,

    /// Power aligned with `frequencies`
    pub power: Vec<f64>,

    /// Frequencies of the detected peaks
    pub peak_frequencies: Vec<f64>,

    /// Power at the detected peaks
    pub peak_values: Vec<f64>,

    /// Absolute frequency of the strongest bin
    pub fundamental_frequency: f64,
}

/// Composes the analyzer with a peak finder
pub struct SpectrumReportBuilder {
    analyzer: SpectrumAnalyzer,
    peak_finder: Arc<dyn PeakFinder>,
    threshold_divisor: f64,
}

impl SpectrumReportBuilder {
    /// Builder using the default local-maximum peak finder
    pub fn new(analyzer: SpectrumAnalyzer) -> Self {
        Self {
            analyzer,
            peak_finder: Arc::new(LocalMaximaPeakFinder::new()),
            threshold_divisor: DEFAULT_THRESHOLD_DIVISOR,
        }
    }

    /// Replace the peak finder
    pub fn with_peak_finder(mut self, peak_finder: Arc<dyn PeakFinder>) -> Self {
        self.peak_finder = peak_finder;
        self
    }

    /// Peaks must reach `max(power) / divisor`
    pub fn with_threshold_divisor(mut self, divisor: f64) -> Self {
        self.threshold_divisor = divisor;
        self
    }

    /// Compute the report for one window
    pub fn build(&self, signal: &[f64]) -> Result<SpectrumReport> {
        let spectrum = self.analyzer.compute_fft(signal)?;

        let min_height = spectrum.max_power() / self.threshold_divisor;
        let peaks = self.peak_finder.find_peaks(&spectrum.power, min_height);

        let peak_frequencies = peaks.iter().map(|&i| spectrum.frequencies[i]).collect();
        let peak_values = peaks.iter().map(|&i| spectrum.power[i]).collect();

        Ok(SpectrumReport {
            frequencies: spectrum.frequencies,
            power: spectrum.power,
            peak_frequencies,
            peak_values,
            fundamental_frequency: spectrum.fundamental_frequency,
        })
    }

    /// Get the wrapped analyzer
    pub fn analyzer(&self) -> &SpectrumAnalyzer {
        &self.analyzer
    }
}

/// Spectrum report with the default peak finder and threshold
pub fn compute_data_for_spectrum(signal: &[f64], sampling_interval: f64) -> Result<SpectrumReport> {
    SpectrumReportBuilder::new(SpectrumAnalyzer::new(AnalyzerConfig { sampling_interval }))
        .build(signal)
}
