//! Error type shared by the analysis entry points

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectralError {
    #[error("Signal is empty")]
    EmptySignal,

    #[error("Spectrum is empty")]
    EmptySpectrum,

    #[error("Sampling interval must be a positive finite number (found: {0})")]
    InvalidSamplingInterval(f64),

    #[error("Length mismatch: expected {expected} values, found {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Half spectrum needs at least 2 coefficients (found: {0})")]
    SpectrumTooShort(usize),

    #[error("{0} must be of type list or numpy.ndarray")]
    InvalidInputType(String),

    #[error("Interpolation needs at least 2 points (found: {0})")]
    TooFewPoints(usize),

    #[error("Interpolation abscissa at index {0} is not finite")]
    NonFiniteAbscissa(usize),

    #[error("Frequency resolution must be a positive finite number (found: {0})")]
    InvalidResolution(f64),

    #[error("Window length must be greater than zero")]
    InvalidWindowLength,

    #[error("FFT processing failed: {0}")]
    Fft(String),
}

pub type Result<T> = std::result::Result<T, SpectralError>;

/// Reject empty signals and unusable sampling intervals.
pub(crate) fn validate_signal(signal: &[f64], sampling_interval: f64) -> Result<()> {
    if signal.is_empty() {
        return Err(SpectralError::EmptySignal);
    }
    if !(sampling_interval.is_finite() && sampling_interval > 0.0) {
        return Err(SpectralError::InvalidSamplingInterval(sampling_interval));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_argument() {
        let err = SpectralError::InvalidInputType("real".into());
        assert_eq!(err.to_string(), "real must be of type list or numpy.ndarray");
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = SpectralError::LengthMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Length mismatch: expected 4 values, found 3");
    }

    #[test]
    fn test_validate_signal() {
        assert_eq!(validate_signal(&[], 1.0), Err(SpectralError::EmptySignal));
        assert_eq!(
            validate_signal(&[1.0], 0.0),
            Err(SpectralError::InvalidSamplingInterval(0.0))
        );
        assert!(validate_signal(&[1.0], 0.5).is_ok());
    }
}
