//! Butterworth IIR filter design and block filtering

pub mod design;
pub mod iir;
pub mod butterworth;

pub use design::{butter, frequency_response, BandType, FrequencyResponse, IirCoefficients};
pub use iir::{filtfilt, lfilter, IirFilter};
pub use butterworth::{
    hp_filter, lp_filter, ButterworthFilter, FilterConfig, FilterKind, HighPass, HighPassFilter,
    LowPass, LowPassFilter, DEFAULT_ORDER,
};
