//! Frequency response of FIR taps.
use num_complex::Complex;
use std::f64::consts::PI;

/// Computes the complex frequency response of `taps` at `freq` (in cycles/sample, i.e., `0.5`
/// is Nyquist).
pub fn frequency_response(taps: &[f64], freq: f64) -> Complex<f64> {
    let omega = -2.0 * PI * freq;
    taps.iter()
        .enumerate()
        .map(|(n, &h)| Complex::from_polar(h, omega * n as f64))
        .sum()
}

/// Magnitude of the frequency response of `taps` at `freq` (in cycles/sample).
///
/// Example usage:
/// ```
/// use xoverdsp::response;
///
/// let taps = [0.25, 0.5, 0.25];
/// assert!((response::magnitude(&taps, 0.0) - 1.0).abs() < 1e-12);
/// assert!(response::magnitude(&taps, 0.5) < 1e-12);
/// ```
pub fn magnitude(taps: &[f64], freq: f64) -> f64 {
    frequency_response(taps, freq).norm()
}

/// Magnitude of the frequency response in dB.
pub fn magnitude_db(taps: &[f64], freq: f64) -> f64 {
    20.0 * magnitude(taps, freq).log10()
}
