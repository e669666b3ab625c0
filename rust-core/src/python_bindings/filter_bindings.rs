//! Python bindings for Butterworth filtering

use pyo3::prelude::*;
use numpy::PyArray1;
use super::extract_samples;
use crate::filters::{self, DEFAULT_ORDER};

/// Butterworth low-pass, causal
///
/// Args:
///     cutoff: Cutoff frequency in Hz
///     fs: Sampling rate in Hz
///     data: Samples as list or numpy array
///     order: Filter order (default: 6)
///
/// Returns:
///     Filtered samples, or the input unchanged when cutoff is not
///     strictly between 0 and fs/2
#[pyfunction]
#[pyo3(name = "LP_filter", signature = (cutoff, fs, data, order=DEFAULT_ORDER))]
pub fn lp_filter<'py>(
    py: Python<'py>,
    cutoff: f64,
    fs: f64,
    data: &PyAny,
    order: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let samples = extract_samples(data, "data")?;
    Ok(PyArray1::from_vec(py, filters::lp_filter(cutoff, fs, &samples, order)))
}

/// Butterworth high-pass, zero phase
///
/// Same arguments as `LP_filter`.
#[pyfunction]
#[pyo3(name = "HP_filter", signature = (cutoff, fs, data, order=DEFAULT_ORDER))]
pub fn hp_filter<'py>(
    py: Python<'py>,
    cutoff: f64,
    fs: f64,
    data: &PyAny,
    order: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let samples = extract_samples(data, "data")?;
    Ok(PyArray1::from_vec(py, filters::hp_filter(cutoff, fs, &samples, order)))
}
