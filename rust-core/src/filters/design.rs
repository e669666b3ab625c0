//! Butterworth IIR filter design and frequency response
//!
//! Digital design goes through the analog prototype: poles on the left half of
//! the unit circle, frequency pre-warping, low/high-pass transform, then the
//! bilinear transform back to the z-plane.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Band type of a designed filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandType {
    Lowpass,
    Highpass,
}

/// Transfer function coefficients, `a[0] == 1`
#[derive(Debug, Clone, PartialEq)]
pub struct IirCoefficients {
    /// Numerator (feed-forward) coefficients
    pub b: Vec<f64>,

    /// Denominator (feedback) coefficients
    pub a: Vec<f64>,
}

impl IirCoefficients {
    /// Filter order (number of poles)
    pub fn order(&self) -> usize {
        self.a.len().max(self.b.len()).saturating_sub(1)
    }

    /// Complex response H(e^jω) at a normalized frequency (units of π rad/sample)
    pub fn response_at(&self, normalized_freq: f64) -> Complex64 {
        let omega = normalized_freq * PI;
        evaluate_polynomial(&self.b, omega) / evaluate_polynomial(&self.a, omega)
    }

    /// Gain at DC
    pub fn dc_gain(&self) -> f64 {
        self.b.iter().sum::<f64>() / self.a.iter().sum::<f64>()
    }
}

/// Σ c[k]·e^(−jωk)
fn evaluate_polynomial(coeffs: &[f64], omega: f64) -> Complex64 {
    coeffs
        .iter()
        .enumerate()
        .map(|(k, &c)| c * Complex64::from_polar(1.0, -omega * k as f64))
        .sum()
}

/// Analog Butterworth prototype poles (cutoff 1 rad/s)
fn prototype_poles(order: usize) -> Vec<Complex64> {
    (0..order)
        .map(|k| {
            let angle = PI * (2 * k + order + 1) as f64 / (2 * order) as f64;
            Complex64::from_polar(1.0, angle)
        })
        .collect()
}

/// Expand roots into monic polynomial coefficients, highest power first
fn poly(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::new(1.0, 0.0)];

    for &root in roots {
        let mut next = vec![Complex64::new(0.0, 0.0); coeffs.len() + 1];
        for (i, &c) in coeffs.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= root * c;
        }
        coeffs = next;
    }

    coeffs
}

/// Design a digital Butterworth filter
///
/// # Arguments
/// * `order` - Number of poles
/// * `wn` - Cutoff, normalized to Nyquist, strictly inside (0, 1)
/// * `band` - Low-pass or high-pass
///
/// # Returns
/// Transfer function coefficients with |H| = 1/√2 at `wn`
pub fn butter(order: usize, wn: f64, band: BandType) -> IirCoefficients {
    // Work at fs = 2 so that Nyquist is 1
    let fs = 2.0;
    let warped = 2.0 * fs * (PI * wn / fs).tan();

    let prototype = prototype_poles(order);

    let (zeros, poles, gain) = match band {
        BandType::Lowpass => {
            let poles: Vec<Complex64> = prototype.iter().map(|&p| p * warped).collect();
            (Vec::new(), poles, warped.powi(order as i32))
        }
        BandType::Highpass => {
            let poles: Vec<Complex64> = prototype.iter().map(|&p| warped / p).collect();
            let neg_product: Complex64 = prototype.iter().map(|&p| -p).product();
            let gain = (Complex64::new(1.0, 0.0) / neg_product).re;
            (vec![Complex64::new(0.0, 0.0); order], poles, gain)
        }
    };

    // Bilinear transform
    let fs2 = 2.0 * fs;
    let mut zeros_z: Vec<Complex64> = zeros.iter().map(|&z| (fs2 + z) / (fs2 - z)).collect();
    let poles_z: Vec<Complex64> = poles.iter().map(|&p| (fs2 + p) / (fs2 - p)).collect();
    zeros_z.resize(poles_z.len(), Complex64::new(-1.0, 0.0));

    let num: Complex64 = zeros.iter().map(|&z| fs2 - z).product();
    let den: Complex64 = poles.iter().map(|&p| fs2 - p).product();
    let gain_z = gain * (num / den).re;

    let b = poly(&zeros_z).iter().map(|c| c.re * gain_z).collect();
    let a = poly(&poles_z).iter().map(|c| c.re).collect();

    IirCoefficients { b, a }
}

/// Frequency response sampled on `[0, π)`
#[derive(Debug, Clone)]
pub struct FrequencyResponse {
    /// Angular frequencies in rad/sample
    pub w: Vec<f64>,

    /// Complex response at each frequency
    pub h: Vec<Complex64>,
}

impl FrequencyResponse {
    /// |H| at each frequency
    pub fn magnitude(&self) -> Vec<f64> {
        self.h.iter().map(|c| c.norm()).collect()
    }
}

/// Evaluate the response at `points` equally spaced frequencies in `[0, π)`
pub fn frequency_response(coeffs: &IirCoefficients, points: usize) -> FrequencyResponse {
    let w: Vec<f64> = (0..points).map(|k| PI * k as f64 / points as f64).collect();
    let h = w.iter().map(|&omega| coeffs.response_at(omega / PI)).collect();

    FrequencyResponse { w, h }
}

/// Magnitude response in dB at normalized frequencies (units of π rad/sample)
pub fn magnitude_response_db(coeffs: &IirCoefficients, frequencies: &[f64]) -> Vec<f64> {
    frequencies
        .iter()
        .map(|&f| 20.0 * coeffs.response_at(f).norm().log10())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
            assert!((a - e).abs() < tol, "Mismatch at {}: {} vs {}", i, a, e);
        }
    }

    #[test]
    fn test_second_order_lowpass_coefficients() {
        let coeffs = butter(2, 0.5, BandType::Lowpass);

        assert_close(&coeffs.b, &[0.29289322, 0.58578644, 0.29289322], 1e-8);
        assert_close(&coeffs.a, &[1.0, 0.0, 0.17157288], 1e-8);
    }

    #[test]
    fn test_second_order_highpass_coefficients() {
        let coeffs = butter(2, 0.5, BandType::Highpass);

        assert_close(&coeffs.b, &[0.29289322, -0.58578644, 0.29289322], 1e-8);
        assert_close(&coeffs.a, &[1.0, 0.0, 0.17157288], 1e-8);
    }

    #[test]
    fn test_half_power_at_cutoff() {
        for band in [BandType::Lowpass, BandType::Highpass] {
            let coeffs = butter(6, 0.2, band);
            let gain = coeffs.response_at(0.2).norm();
            assert!((gain - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9, "{:?}: {}", band, gain);
        }
    }

    #[test]
    fn test_passband_gains() {
        let lp = butter(6, 0.1, BandType::Lowpass);
        assert!((lp.dc_gain() - 1.0).abs() < 1e-9);
        assert!(lp.response_at(0.999).norm() < 1e-6);

        let hp = butter(6, 0.1, BandType::Highpass);
        assert!(hp.dc_gain().abs() < 1e-9);
        assert!((hp.response_at(1.0).norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_order_and_stability() {
        let coeffs = butter(6, 0.3, BandType::Lowpass);
        assert_eq!(coeffs.order(), 6);
        assert_eq!(coeffs.b.len(), 7);
        assert!((coeffs.a[0] - 1.0).abs() < 1e-12);

        // Prototype poles lie in the left half plane
        let proto = prototype_poles(6);
        assert!(proto.iter().all(|p| p.re < 0.0));
    }

    #[test]
    fn test_frequency_response_grid() {
        let coeffs = butter(4, 0.25, BandType::Lowpass);
        let response = frequency_response(&coeffs, 8);

        assert_eq!(response.w.len(), 8);
        assert_eq!(response.w[0], 0.0);
        assert!(response.w[7] < PI);

        let magnitude = response.magnitude();
        assert!((magnitude[0] - 1.0).abs() < 1e-9);
        assert!(magnitude.windows(2).all(|m| m[1] <= m[0] + 1e-12));
    }

    #[test]
    fn test_magnitude_db_at_cutoff() {
        let coeffs = butter(3, 0.4, BandType::Highpass);
        let db = magnitude_response_db(&coeffs, &[0.4]);

        assert!((db[0] + 3.0103).abs() < 1e-3);
    }
}
