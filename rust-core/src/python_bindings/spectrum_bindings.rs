//! Python bindings for spectrum analysis

use pyo3::prelude::*;
use numpy::PyArray1;
use super::extract_samples;
use crate::spectrum::{self, ReconstructionMode};

/// Normalized power spectrum
///
/// Args:
///     signal: Samples as list or numpy array
///     sampling_interval: Time between samples in seconds
///
/// Returns:
///     (frequencies, power, fundamental_frequency), frequencies ascending
#[pyfunction]
pub fn compute_fft<'py>(
    py: Python<'py>,
    signal: &PyAny,
    sampling_interval: f64,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>, f64)> {
    let samples = extract_samples(signal, "signal")?;
    let result = spectrum::compute_fft(&samples, sampling_interval)?;

    Ok((
        PyArray1::from_vec(py, result.frequencies),
        PyArray1::from_vec(py, result.power),
        result.fundamental_frequency,
    ))
}

/// Inverse transform of a spectrum given as real and imaginary parts
///
/// Args:
///     real: Real parts
///     imag: Imaginary parts
///     half: Coefficients hold DC..Nyquist only (default: True)
///
/// Returns:
///     Real signal as numpy array
#[pyfunction]
#[pyo3(signature = (real, imag, half=true))]
pub fn compute_ifft<'py>(
    py: Python<'py>,
    real: &PyAny,
    imag: &PyAny,
    half: bool,
) -> PyResult<&'py PyArray1<f64>> {
    let real = extract_samples(real, "real")?;
    let imag = extract_samples(imag, "imag")?;
    let mode = if half {
        ReconstructionMode::HalfSpectrum
    } else {
        ReconstructionMode::FullSpectrum
    };

    let signal = spectrum::compute_ifft(&real, &imag, mode)?;
    Ok(PyArray1::from_vec(py, signal))
}

/// Frequency of the strongest spectral bin in Hz
#[pyfunction]
pub fn compute_fundamental_frequency(signal: &PyAny, sampling_interval: f64) -> PyResult<f64> {
    let samples = extract_samples(signal, "signal")?;
    Ok(spectrum::compute_fundamental_frequency(&samples, sampling_interval)?)
}

/// Spectrum with its peaks
///
/// Returns:
///     (frequencies, power, peak_frequencies, peak_values, fundamental_frequency)
#[pyfunction]
pub fn compute_data_for_spectrum<'py>(
    py: Python<'py>,
    signal: &PyAny,
    sampling_interval: f64,
) -> PyResult<(
    &'py PyArray1<f64>,
    &'py PyArray1<f64>,
    &'py PyArray1<f64>,
    &'py PyArray1<f64>,
    f64,
)> {
    let samples = extract_samples(signal, "signal")?;
    let report = spectrum::compute_data_for_spectrum(&samples, sampling_interval)?;

    Ok((
        PyArray1::from_vec(py, report.frequencies),
        PyArray1::from_vec(py, report.power),
        PyArray1::from_vec(py, report.peak_frequencies),
        PyArray1::from_vec(py, report.peak_values),
        report.fundamental_frequency,
    ))
}
