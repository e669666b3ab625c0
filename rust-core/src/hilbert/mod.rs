//! Hilbert transform and marginal Hilbert spectrum

pub mod transform;
pub mod marginal;

pub use transform::{
    analytic_signal, hilb, instantaneous_frequency, unwrap_phase, AnalyticSignal, HilbertAnalyzer,
    HilbertConfig,
};
pub use marginal::{mhs, mhs_quantized, MarginalSpectrum, MarginalSpectrumAggregator};
