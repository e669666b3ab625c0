//! Peak detection capability
//!
//! The report builder only needs "indices of local maxima at or above a
//! height"; anything implementing [`PeakFinder`] can be plugged in.

/// Local-maximum search over a series
pub trait PeakFinder: Send + Sync {
    /// Indices (ascending) of local maxima with `series[i] >= min_height`
    fn find_peaks(&self, series: &[f64], min_height: f64) -> Vec<usize>;
}

/// Rising-edge local maximum detector.
///
/// Index `i` is a peak when the series strictly rises into it and does not
/// rise out of it, so the first sample of a plateau counts. The first and last
/// samples are never peaks and samples next to a NaN are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalMaximaPeakFinder {
    /// Minimum index distance between reported peaks (1 keeps all)
    min_distance: usize,
}

impl LocalMaximaPeakFinder {
    /// Create a new peak finder reporting every local maximum
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the highest peak inside each `min_distance` neighbourhood
    pub fn with_min_distance(mut self, min_distance: usize) -> Self {
        self.min_distance = min_distance;
        self
    }

    fn candidates(series: &[f64], min_height: f64) -> Vec<usize> {
        let n = series.len();
        if n < 3 {
            return Vec::new();
        }

        (1..n - 1)
            .filter(|&i| {
                let (prev, x, next) = (series[i - 1], series[i], series[i + 1]);
                if prev.is_nan() || x.is_nan() || next.is_nan() {
                    return false;
                }
                x - prev > 0.0 && next - x <= 0.0 && x >= min_height
            })
            .collect()
    }

    fn enforce_distance(&self, series: &[f64], mut peaks: Vec<usize>) -> Vec<usize> {
        if self.min_distance <= 1 || peaks.len() < 2 {
            return peaks;
        }

        // Highest first; ties keep the lower index
        let mut by_height = peaks.clone();
        by_height.sort_by(|&a, &b| series[b].total_cmp(&series[a]).then(a.cmp(&b)));

        let mut removed = vec![false; series.len()];
        for &idx in &by_height {
            if removed[idx] {
                continue;
            }
            for &other in &peaks {
                if other != idx && other.abs_diff(idx) < self.min_distance {
                    removed[other] = true;
                }
            }
        }

        peaks.retain(|&i| !removed[i]);
        peaks
    }
}

impl PeakFinder for LocalMaximaPeakFinder {
    fn find_peaks(&self, series: &[f64], min_height: f64) -> Vec<usize> {
        let peaks = Self::candidates(series, min_height);
        self.enforce_distance(series, peaks)
    }
}
