//! Spectral analysis with FFT

pub mod fft;
pub mod analysis;
pub mod peaks;
pub mod report;
pub mod batch;

pub use fft::FftEngine;
pub use analysis::{
    compute_fft, compute_fundamental_frequency, compute_ifft, AnalyzerConfig, PowerSpectrum,
    ReconstructionMode, SpectrumAnalyzer,
};
pub use peaks::{LocalMaximaPeakFinder, PeakFinder};
pub use report::{compute_data_for_spectrum, SpectrumReport, SpectrumReportBuilder};
pub use batch::compute_windowed_reports;
