//! PyO3 bindings for Python integration

use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyList;
use numpy::{PyReadonlyArray1, PyUntypedArray};
use crate::error::SpectralError;

mod filter_bindings;
mod hilbert_bindings;
mod spectrum_bindings;

impl From<SpectralError> for PyErr {
    fn from(err: SpectralError) -> PyErr {
        match err {
            SpectralError::InvalidInputType(_) => PyTypeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Read a list or 1-D numpy array into owned samples.
///
/// Arrays of any numeric dtype are converted to float64 first.
pub(crate) fn extract_samples(obj: &PyAny, name: &str) -> PyResult<Vec<f64>> {
    if let Ok(list) = obj.downcast::<PyList>() {
        return list.extract();
    }

    if obj.downcast::<PyUntypedArray>().is_ok() {
        let converted = obj.call_method1("astype", ("float64",))?;
        let array: PyReadonlyArray1<f64> = converted.extract()?;
        return Ok(array.as_array().to_vec());
    }

    Err(SpectralError::InvalidInputType(name.to_string()).into())
}

/// Python module definition
#[pymodule]
fn vibration_spectra(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(spectrum_bindings::compute_fft, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::compute_ifft, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::compute_fundamental_frequency, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::compute_data_for_spectrum, m)?)?;

    m.add_function(wrap_pyfunction!(filter_bindings::lp_filter, m)?)?;
    m.add_function(wrap_pyfunction!(filter_bindings::hp_filter, m)?)?;

    m.add_function(wrap_pyfunction!(hilbert_bindings::hilb, m)?)?;
    m.add_function(wrap_pyfunction!(hilbert_bindings::mhs, m)?)?;
    m.add_function(wrap_pyfunction!(hilbert_bindings::interp, m)?)?;
    m.add_class::<hilbert_bindings::PyInterpolator>()?;

    Ok(())
}
