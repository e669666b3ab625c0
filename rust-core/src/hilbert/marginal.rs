//! Marginal Hilbert spectrum
//!
//! Sums instantaneous amplitude over time for every instantaneous frequency
//! value. Frequencies are grouped by exact equality: values that differ only
//! by rounding stay in separate bins. Use [`mhs_quantized`] to snap them to a
//! grid first.

use crate::error::{Result, SpectralError};
use crate::render::{MarginalSpectrumPlot, SharedRenderer};

/// Energy per unique instantaneous frequency
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarginalSpectrum {
    /// Unique frequencies, ascending
    pub frequencies: Vec<f64>,

    /// Summed amplitude for each frequency
    pub amplitudes: Vec<f64>,
}

impl MarginalSpectrum {
    /// Number of frequency bins
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

struct Bin {
    frequency: f64,
    amplitude: f64,
    first_index: usize,
}

/// Group `amplitude` by exactly equal `freq` values and sum each group
///
/// # Arguments
/// * `amplitude` - Instantaneous amplitude per sample
/// * `freq` - Instantaneous frequency per sample, same length
///
/// # Returns
/// Unique frequencies in ascending order with their summed amplitudes.
/// NaN frequencies never equal anything, themselves included, and are left out.
pub fn mhs(amplitude: &[f64], freq: &[f64]) -> Result<MarginalSpectrum> {
    if amplitude.len() != freq.len() {
        return Err(SpectralError::LengthMismatch {
            expected: freq.len(),
            actual: amplitude.len(),
        });
    }

    let mut order: Vec<usize> = (0..freq.len()).filter(|&i| !freq[i].is_nan()).collect();
    order.sort_by(|&a, &b| freq[a].total_cmp(&freq[b]).then(a.cmp(&b)));

    // Equal values are adjacent after sorting; -0.0 and 0.0 too
    let mut bins: Vec<Bin> = Vec::new();
    for i in order {
        match bins.last_mut() {
            Some(bin) if bin.frequency == freq[i] => {
                bin.amplitude += amplitude[i];
                if i < bin.first_index {
                    bin.first_index = i;
                    bin.frequency = freq[i];
                }
            }
            _ => bins.push(Bin {
                frequency: freq[i],
                amplitude: amplitude[i],
                first_index: i,
            }),
        }
    }

    Ok(MarginalSpectrum {
        frequencies: bins.iter().map(|b| b.frequency).collect(),
        amplitudes: bins.iter().map(|b| b.amplitude).collect(),
    })
}

/// Like [`mhs`], after rounding every frequency to the nearest multiple of
/// `resolution`
pub fn mhs_quantized(amplitude: &[f64], freq: &[f64], resolution: f64) -> Result<MarginalSpectrum> {
    if !(resolution.is_finite() && resolution > 0.0) {
        return Err(SpectralError::InvalidResolution(resolution));
    }

    let snapped: Vec<f64> = freq
        .iter()
        .map(|&f| (f / resolution).round() * resolution)
        .collect();
    mhs(amplitude, &snapped)
}

/// Marginal spectrum computation with an optional renderer
#[derive(Clone, Default)]
pub struct MarginalSpectrumAggregator {
    renderer: Option<SharedRenderer>,
}

impl MarginalSpectrumAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render every computed spectrum
    pub fn with_renderer(mut self, renderer: SharedRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Compute the spectrum; `phase` is only passed on to the renderer
    pub fn aggregate(
        &self,
        amplitude: &[f64],
        freq: &[f64],
        phase: Option<&[f64]>,
    ) -> Result<MarginalSpectrum> {
        let spectrum = mhs(amplitude, freq)?;

        if let Some(renderer) = &self.renderer {
            renderer.render_marginal_spectrum(&MarginalSpectrumPlot {
                amplitude,
                frequency: freq,
                phase,
                spectrum: &spectrum,
            });
        }

        Ok(spectrum)
    }
}
