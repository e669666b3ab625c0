//! Python bindings for Hilbert analysis and interpolation

use pyo3::prelude::*;
use numpy::PyArray1;
use num_complex::Complex64;
use super::extract_samples;
use crate::hilbert;
use crate::interp::{LinearInterpolator, OutOfBounds};

/// Analytic signal, amplitude and phase
///
/// Args:
///     signal: Samples as list or numpy array
///     unwrap: Make the phase continuous (default: True)
///
/// Returns:
///     (analytic, amplitude, phase)
#[pyfunction]
#[pyo3(signature = (signal, unwrap=true))]
pub fn hilb<'py>(
    py: Python<'py>,
    signal: &PyAny,
    unwrap: bool,
) -> PyResult<(&'py PyArray1<Complex64>, &'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let samples = extract_samples(signal, "signal")?;
    let result = hilbert::hilb(&samples, unwrap)?;

    Ok((
        PyArray1::from_vec(py, result.analytic),
        PyArray1::from_vec(py, result.amplitude),
        PyArray1::from_vec(py, result.phase),
    ))
}

/// Marginal Hilbert spectrum
///
/// Returns:
///     (amplitudes, frequencies), frequencies unique and ascending
#[pyfunction]
pub fn mhs<'py>(
    py: Python<'py>,
    amplitude: &PyAny,
    freq: &PyAny,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let amplitude = extract_samples(amplitude, "amplitude")?;
    let freq = extract_samples(freq, "freq")?;
    let spectrum = hilbert::mhs(&amplitude, &freq)?;

    Ok((
        PyArray1::from_vec(py, spectrum.amplitudes),
        PyArray1::from_vec(py, spectrum.frequencies),
    ))
}

/// Piecewise-linear interpolator exposed to Python
#[pyclass(name = "Interpolator")]
pub struct PyInterpolator {
    inner: LinearInterpolator,
}

#[pymethods]
impl PyInterpolator {
    /// Evaluate at a scalar, list or numpy array
    fn __call__(&self, py: Python<'_>, x: &PyAny) -> PyResult<PyObject> {
        if let Ok(value) = x.extract::<f64>() {
            return Ok(self.inner.evaluate(value).into_py(py));
        }

        let xs = extract_samples(x, "x")?;
        let values: &PyAny = PyArray1::from_vec(py, self.inner.evaluate_many(&xs));
        Ok(values.into_py(py))
    }

    /// (min x, max x) of the sampled points
    fn domain(&self) -> (f64, f64) {
        self.inner.domain()
    }
}

/// Build a linear interpolator
///
/// Args:
///     x: Abscissas
///     y: Ordinates
///     oob_extrapolate: Extend the end segments instead of returning 0.0
///         outside the sampled range (default: False)
#[pyfunction]
#[pyo3(signature = (x, y, oob_extrapolate=false))]
pub fn interp(x: &PyAny, y: &PyAny, oob_extrapolate: bool) -> PyResult<PyInterpolator> {
    let x = extract_samples(x, "x")?;
    let y = extract_samples(y, "y")?;
    let out_of_bounds = if oob_extrapolate {
        OutOfBounds::Extrapolate
    } else {
        OutOfBounds::Zero
    };

    Ok(PyInterpolator {
        inner: crate::interp::interp(&x, &y, out_of_bounds)?,
    })
}
