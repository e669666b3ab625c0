//! Vibration Spectra - Spectral Analysis Core for Vibration Signals
//!
//! FFT power spectra, fundamental frequency and peak reports, Butterworth
//! filtering, Hilbert amplitude/phase and the marginal Hilbert spectrum, with
//! optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod diagnostics;
pub mod error;
pub mod filters;
pub mod hilbert;
pub mod interp;
pub mod render;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;


pub use diagnostics::{DiagnosticSink, NoopSink, TracingSink};
pub use error::{Result, SpectralError};
pub use filters::{hp_filter, lp_filter, FilterConfig, HighPassFilter, LowPassFilter};
pub use hilbert::{hilb, mhs, HilbertAnalyzer, MarginalSpectrum};
pub use interp::{interp, LinearInterpolator, OutOfBounds};
pub use render::{NoopRenderer, SpectrumRenderer};
pub use spectrum::{
    compute_data_for_spectrum, compute_fft, compute_fundamental_frequency, compute_ifft,
    SpectrumAnalyzer,
};
