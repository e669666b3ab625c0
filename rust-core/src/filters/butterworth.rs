//! Butterworth low-pass and high-pass filtering
//!
//! Both filters share one template: normalize the cutoff against Nyquist,
//! design the coefficients, then apply them with a band-specific strategy.
//! Low-pass runs causally (one pass, phase delay). High-pass runs forward and
//! backward (zero phase), which keeps bias removal free of phase distortion.
//!
//! A cutoff that does not normalize into (0, 1) is a configuration problem,
//! not a failure: the data comes back untouched and the reason is logged.

use super::design::{butter, frequency_response, BandType, IirCoefficients};
use super::iir::{filtfilt, lfilter};
use crate::diagnostics::{default_sink, SharedSink};
use crate::render::{FilterResponsePlot, SharedRenderer};
use std::marker::PhantomData;

/// Default Butterworth order
pub const DEFAULT_ORDER: usize = 6;

/// Number of frequencies handed to the renderer
const RESPONSE_POINTS: usize = 8000;

const COMPONENT: &str = "filters";

/// Band-specific part of the filtering template
pub trait FilterKind: Send + Sync + 'static {
    /// Band to design
    const BAND: BandType;

    /// Short name used in diagnostics
    const NAME: &'static str;

    /// Title for rendered frequency responses
    const TITLE: &'static str;

    /// Apply designed coefficients to the data
    fn apply(coeffs: &IirCoefficients, data: &[f64]) -> Vec<f64>;
}

/// Low-pass, causal single-direction application
#[derive(Debug, Clone, Copy)]
pub struct LowPass;

impl FilterKind for LowPass {
    const BAND: BandType = BandType::Lowpass;
    const NAME: &'static str = "LP_filter";
    const TITLE: &'static str = "Lowpass Filter Frequency Response";

    fn apply(coeffs: &IirCoefficients, data: &[f64]) -> Vec<f64> {
        lfilter(coeffs, data)
    }
}

/// High-pass, zero-phase forward-backward application
#[derive(Debug, Clone, Copy)]
pub struct HighPass;

impl FilterKind for HighPass {
    const BAND: BandType = BandType::Highpass;
    const NAME: &'static str = "HP_filter";
    const TITLE: &'static str = "Highpass Filter Frequency Response";

    fn apply(coeffs: &IirCoefficients, data: &[f64]) -> Vec<f64> {
        filtfilt(coeffs, data)
    }
}

/// Filter configuration
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Butterworth order
    pub order: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
        }
    }
}

/// Butterworth filter for one band type
pub struct ButterworthFilter<K: FilterKind> {
    config: FilterConfig,
    diagnostics: SharedSink,
    renderer: Option<SharedRenderer>,
    kind: PhantomData<K>,
}

pub type LowPassFilter = ButterworthFilter<LowPass>;
pub type HighPassFilter = ButterworthFilter<HighPass>;

impl<K: FilterKind> Default for ButterworthFilter<K> {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

impl<K: FilterKind> ButterworthFilter<K> {
    /// Create a filter logging to `tracing`, without rendering
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            diagnostics: default_sink(),
            renderer: None,
            kind: PhantomData,
        }
    }

    /// Send diagnostics to `sink`
    pub fn with_diagnostics(mut self, sink: SharedSink) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Render the frequency response of every applied filter
    pub fn with_renderer(mut self, renderer: SharedRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Cutoff divided by the Nyquist frequency
    pub fn normalized_cutoff(cutoff: f64, sampling_rate: f64) -> f64 {
        cutoff / (0.5 * sampling_rate)
    }

    /// Coefficients for `cutoff`, or `None` when the cutoff is unusable
    pub fn design(&self, cutoff: f64, sampling_rate: f64) -> Option<IirCoefficients> {
        let wn = Self::normalized_cutoff(cutoff, sampling_rate);
        (wn > 0.0 && wn < 1.0).then(|| butter(self.config.order, wn, K::BAND))
    }

    /// Filter `data` sampled at `sampling_rate` Hz
    ///
    /// # Returns
    /// Filtered samples, or an unchanged copy of `data` when the normalized
    /// cutoff falls outside (0, 1)
    pub fn filter(&self, cutoff: f64, sampling_rate: f64, data: &[f64]) -> Vec<f64> {
        let wn = Self::normalized_cutoff(cutoff, sampling_rate);

        let Some(coeffs) = self.design(cutoff, sampling_rate) else {
            self.debug(format!("{}: normalized cutoff {} is not in (0,1)", K::NAME, wn));
            self.debug(format!("{}: cutoff: {}, fs: {}", K::NAME, cutoff, sampling_rate));
            self.debug(format!("{}: no filter applied", K::NAME));
            return data.to_vec();
        };

        let output = K::apply(&coeffs, data);
        self.debug(format!("{}: normalized cutoff {} is in (0,1)", K::NAME, wn));

        if let Some(renderer) = &self.renderer {
            let response = frequency_response(&coeffs, RESPONSE_POINTS);
            renderer.render_filter_response(&FilterResponsePlot {
                title: K::TITLE,
                cutoff,
                sampling_rate,
                response: &response,
            });
        }

        output
    }

    /// Get current configuration
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    fn debug(&self, message: String) {
        self.diagnostics.debug(COMPONENT, &message);
    }
}

/// Butterworth low-pass with causal application
pub fn lp_filter(cutoff: f64, sampling_rate: f64, data: &[f64], order: usize) -> Vec<f64> {
    LowPassFilter::new(FilterConfig { order }).filter(cutoff, sampling_rate, data)
}

/// Butterworth high-pass with zero-phase application
pub fn hp_filter(cutoff: f64, sampling_rate: f64, data: &[f64], order: usize) -> Vec<f64> {
    HighPassFilter::new(FilterConfig { order }).filter(cutoff, sampling_rate, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::testing::RecordingSink;
    use crate::diagnostics::NoopSink;
    use crate::render::{NoopRenderer, SpectrumRenderer};
    use std::f64::consts::PI;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn tone(freq_hz: f64, sampling_rate: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * PI * freq_hz * i as f64 / sampling_rate).sin())
            .collect()
    }

    fn rms(x: &[f64]) -> f64 {
        (x.iter().map(|v| v * v).sum::<f64>() / x.len() as f64).sqrt()
    }

    #[test]
    fn test_out_of_range_cutoff_passes_through() {
        let data = tone(10.0, 100.0, 64);

        for cutoff in [50.0, 80.0, 0.0, -5.0] {
            assert_eq!(lp_filter(cutoff, 100.0, &data, DEFAULT_ORDER), data);
            assert_eq!(hp_filter(cutoff, 100.0, &data, DEFAULT_ORDER), data);
        }

        // Degenerate sampling rate
        assert_eq!(lp_filter(10.0, 0.0, &data, DEFAULT_ORDER), data);
    }

    #[test]
    fn test_lowpass_attenuates_stopband() {
        let fs = 1000.0;
        let data = tone(300.0, fs, 2000);

        let filtered = lp_filter(50.0, fs, &data, DEFAULT_ORDER);

        assert_eq!(filtered.len(), data.len());
        assert!(rms(&filtered[1000..]) < 0.01 * rms(&data[1000..]));
    }

    #[test]
    fn test_lowpass_keeps_passband() {
        let fs = 1000.0;
        let data = tone(5.0, fs, 2000);

        let filtered = lp_filter(50.0, fs, &data, DEFAULT_ORDER);

        let ratio = rms(&filtered[1000..]) / rms(&data[1000..]);
        assert!(ratio > 0.95 && ratio < 1.05, "ratio = {}", ratio);
    }

    #[test]
    fn test_highpass_removes_offset_without_phase_shift() {
        let fs = 1000.0;
        let wave = tone(50.0, fs, 2000);
        let data: Vec<f64> = wave.iter().map(|w| w + 3.0).collect();

        let filtered = hp_filter(20.0, fs, &data, DEFAULT_ORDER);

        let middle = &filtered[500..1500];
        let mean = middle.iter().sum::<f64>() / middle.len() as f64;
        assert!(mean.abs() < 0.05, "mean = {}", mean);

        for i in 500..1500 {
            assert!((filtered[i] - wave[i]).abs() < 0.05, "Mismatch at {}", i);
        }
    }

    #[test]
    fn test_diagnostics_on_pass_through() {
        let sink = Arc::new(RecordingSink::default());
        let filter = LowPassFilter::default().with_diagnostics(sink.clone());

        filter.filter(60.0, 100.0, &[1.0, 2.0, 3.0]);

        let lines = sink.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("is not in (0,1)"));
        assert!(lines[1].contains("cutoff: 60"));
        assert!(lines[2].contains("no filter applied"));
    }

    #[test]
    fn test_diagnostics_on_applied_filter() {
        let sink = Arc::new(RecordingSink::default());
        let filter = HighPassFilter::default().with_diagnostics(sink.clone());

        filter.filter(10.0, 100.0, &tone(5.0, 100.0, 100));

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("HP_filter: normalized cutoff 0.2"));
    }

    #[test]
    fn test_renderer_receives_response() {
        #[derive(Default)]
        struct CountingRenderer {
            calls: AtomicUsize,
        }

        impl SpectrumRenderer for CountingRenderer {
            fn render_filter_response(&self, plot: &FilterResponsePlot<'_>) {
                assert_eq!(plot.response.w.len(), RESPONSE_POINTS);
                assert_eq!(plot.title, LowPass::TITLE);
                self.calls.fetch_add(1, Ordering::SeqCst);
            }
        }

        let renderer = Arc::new(CountingRenderer::default());
        let filter = LowPassFilter::default().with_renderer(renderer.clone());

        filter.filter(10.0, 100.0, &[0.0; 16]);
        filter.filter(90.0, 100.0, &[0.0; 16]);

        // Pass-through does not render
        assert_eq!(renderer.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sinks_and_renderers_do_not_change_output() {
        let data = tone(3.0, 100.0, 256);

        let plain = HighPassFilter::default().filter(10.0, 100.0, &data);
        let quiet = HighPassFilter::default()
            .with_diagnostics(Arc::new(NoopSink))
            .with_renderer(Arc::new(NoopRenderer))
            .filter(10.0, 100.0, &data);

        assert_eq!(plain, quiet);
    }

    #[test]
    fn test_filters_do_not_mutate_input() {
        let data = tone(7.0, 100.0, 128);
        let copy = data.clone();

        let _ = lp_filter(10.0, 100.0, &data, 4);
        let _ = hp_filter(10.0, 100.0, &data, 4);

        assert_eq!(data, copy);
    }
}
