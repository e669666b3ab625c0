//! Window-by-window reports for long recordings
//!
//! Windows are independent, so they are analysed in parallel.

use super::report::{SpectrumReport, SpectrumReportBuilder};
use crate::error::{Result, SpectralError};
use rayon::prelude::*;

/// Split `signal` into consecutive windows of `window_len` samples and build
/// one report per window. A trailing partial window is dropped.
pub fn compute_windowed_reports(
    builder: &SpectrumReportBuilder,
    signal: &[f64],
    window_len: usize,
) -> Result<Vec<SpectrumReport>> {
    if window_len == 0 {
        return Err(SpectralError::InvalidWindowLength);
    }

    let windows = signal.len() / window_len;
    tracing::trace!(windows, window_len, "building windowed spectrum reports");

    signal
        .par_chunks_exact(window_len)
        .map(|window| builder.build(window))
        .collect()
}
