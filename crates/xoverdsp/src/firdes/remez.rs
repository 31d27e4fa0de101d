use pm_remez::BandSetting;
use pm_remez::ParametersBuilder;
use pm_remez::Symmetry;
use pm_remez::constant;
use pm_remez::pm_parameters;
use pm_remez::pm_remez;

use super::band_weights;
use super::normalize_bands;
use crate::DesignError;

/// Exchange iterations before giving up on a design.
const MAX_ITERATIONS: usize = 100;
/// Relative spread of the extremal errors at which the exchange has converged.
const FLATNESS_THRESHOLD: f64 = 1e-3;

/// Designs a linear phase FIR filter that minimizes the maximum weighted error.
///
/// * `num_taps` - filter length, at least 3. Even lengths yield Type II filters, which
///   always have a zero at Nyquist.
/// * `bands` - band edges as consecutive `[lo, hi]` pairs in `[0, fs / 2]`.
/// * `desired` - desired gain, one value per band.
/// * `weights` - error weight per band, uniform if `None`.
/// * `fs` - sampling frequency, `1.0` if `None`.
///
/// Example usage:
/// ```
/// use xoverdsp::firdes;
///
/// let taps = firdes::remez(31, &[0.0, 0.2, 0.3, 0.5], &[1.0, 0.0], None, None).unwrap();
/// assert_eq!(taps.len(), 31);
/// ```
pub fn remez(
    num_taps: usize,
    bands: &[f64],
    desired: &[f64],
    weights: Option<&[f64]>,
    fs: Option<f64>,
) -> Result<Vec<f64>, DesignError> {
    if num_taps < 3 {
        return Err(DesignError::InvalidTapCount { num_taps, min: 3 });
    }
    let bands = normalize_bands(bands, fs)?;
    if desired.len() != bands.len() {
        return Err(DesignError::LengthMismatch {
            what: "desired gains (one per band)",
            expected: bands.len(),
            got: desired.len(),
        });
    }
    let weights = band_weights(weights, bands.len())?;

    let settings = bands
        .iter()
        .zip(desired)
        .zip(&weights)
        .map(|((&[lo, hi], &gain), &weight)| {
            BandSetting::with_weight(lo, hi, constant(gain), constant(weight))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut params = pm_parameters(num_taps, &settings)?;
    params
        .set_symmetry(Symmetry::Even)
        .set_max_iterations(MAX_ITERATIONS)
        .set_flatness_threshold(FLATNESS_THRESHOLD);
    let design = pm_remez(&params)?;

    trace!(
        "remez: {} taps, {} iterations, flatness {:e}, weighted error {:e}",
        num_taps, design.num_iterations, design.flatness, design.weighted_error
    );
    if design.impulse_response.iter().any(|h| !h.is_finite()) {
        return Err(DesignError::NoConvergence(design.num_iterations));
    }
    if design.flatness > FLATNESS_THRESHOLD {
        warn!(
            "remez stopped after {} iterations with flatness {:e}",
            design.num_iterations, design.flatness
        );
    }

    Ok(design.impulse_response)
}
