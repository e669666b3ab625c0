//! Optional rendering hook
//!
//! The numerical code never depends on a plotting backend. Callers that want
//! pictures implement [`SpectrumRenderer`] and attach it to a component; the
//! default renderer ignores everything.

use crate::filters::design::FrequencyResponse;
use crate::hilbert::marginal::MarginalSpectrum;
use std::sync::Arc;

/// Data describing an applied filter's frequency response
#[derive(Debug, Clone, Copy)]
pub struct FilterResponsePlot<'a> {
    /// Human-readable title, e.g. "Lowpass Filter Frequency Response"
    pub title: &'a str,

    /// Requested cutoff in Hz
    pub cutoff: f64,

    /// Sampling rate in Hz
    pub sampling_rate: f64,

    /// Response on `[0, π)` rad/sample
    pub response: &'a FrequencyResponse,
}

impl FilterResponsePlot<'_> {
    /// Response frequencies converted to Hz
    pub fn frequencies_hz(&self) -> Vec<f64> {
        self.response
            .w
            .iter()
            .map(|&w| 0.5 * self.sampling_rate * w / std::f64::consts::PI)
            .collect()
    }
}

/// Inputs and output of a marginal spectrum computation
#[derive(Debug, Clone, Copy)]
pub struct MarginalSpectrumPlot<'a> {
    pub amplitude: &'a [f64],
    pub frequency: &'a [f64],
    pub phase: Option<&'a [f64]>,
    pub spectrum: &'a MarginalSpectrum,
}

/// Rendering capability; every method defaults to doing nothing
pub trait SpectrumRenderer: Send + Sync {
    fn render_filter_response(&self, _plot: &FilterResponsePlot<'_>) {}

    fn render_marginal_spectrum(&self, _plot: &MarginalSpectrumPlot<'_>) {}
}

/// Renderer that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl SpectrumRenderer for NoopRenderer {}

/// Shared handle used by components. Components hold `Option<SharedRenderer>`
/// and skip the rendering work entirely when it is `None`.
pub type SharedRenderer = Arc<dyn SpectrumRenderer>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::design::{butter, frequency_response, BandType};

    #[test]
    fn test_response_frequencies_in_hz() {
        let coeffs = butter(2, 0.5, BandType::Lowpass);
        let response = frequency_response(&coeffs, 4);
        let plot = FilterResponsePlot {
            title: "Lowpass Filter Frequency Response",
            cutoff: 25.0,
            sampling_rate: 100.0,
            response: &response,
        };

        let hz = plot.frequencies_hz();
        for (f, e) in hz.iter().zip([0.0, 12.5, 25.0, 37.5].iter()) {
            assert!((f - e).abs() < 1e-9);
        }

        // Default renderer accepts anything
        NoopRenderer.render_filter_response(&plot);
    }
}
