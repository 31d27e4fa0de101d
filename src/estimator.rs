//! Filter length estimation.
use std::fmt;
use std::str::FromStr;

use crate::Error;
use crate::FilterSpec;
use crate::Result;
use crate::ripple::passband_ripple;
use crate::ripple::stopband_ripple;

/// Rule of thumb used to estimate the number of taps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapEstimator {
    /// `N = Aa / (22 Bt)`, only needs the stopband attenuation.
    Harris,
    /// `N = 2/3 log10(1 / (10 dp da)) / Bt`, needs passband and stopband attenuation.
    Bellanger,
}

type EstimatorFn = fn(&FilterSpec) -> Result<usize>;

impl TapEstimator {
    fn estimator(self) -> EstimatorFn {
        match self {
            TapEstimator::Harris => estimate_harris,
            TapEstimator::Bellanger => estimate_bellanger,
        }
    }

    /// Bellanger when a passband attenuation is available, Harris otherwise.
    pub fn auto(spec: &FilterSpec) -> Self {
        if spec.passband_attenuation_db().is_some() {
            TapEstimator::Bellanger
        } else {
            TapEstimator::Harris
        }
    }

    /// Estimates the number of taps needed to meet `spec`.
    pub fn estimate(self, spec: &FilterSpec) -> Result<usize> {
        let num_taps = self.estimator()(spec)?;
        info!("numtaps is estimated as {num_taps}");
        Ok(num_taps)
    }
}

impl fmt::Display for TapEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TapEstimator::Harris => write!(f, "harris"),
            TapEstimator::Bellanger => write!(f, "bellanger"),
        }
    }
}

impl FromStr for TapEstimator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "harris" => Ok(TapEstimator::Harris),
            "bellanger" => Ok(TapEstimator::Bellanger),
            _ => Err(Error::invalid(
                "numtaps finder",
                format!("expected `harris` or `bellanger`, got `{s}`"),
            )),
        }
    }
}

/// Harris' estimate for a transition width `bt_norm` (cycles/sample) and a stopband
/// attenuation `aa` (dB).
pub fn harris_taps(bt_norm: f64, aa: f64) -> f64 {
    (aa / (22.0 * bt_norm)).ceil()
}

/// Bellanger's estimate for a transition width `bt_norm` (cycles/sample) and the linear
/// passband and stopband deviations `dp` and `da`.
pub fn bellanger_taps(bt_norm: f64, dp: f64, da: f64) -> f64 {
    (2.0 * (1.0 / (10.0 * dp * da)).log10() / (3.0 * bt_norm)).ceil()
}

fn stopband_attenuation(spec: &FilterSpec) -> Result<f64> {
    spec.stopband_attenuation_db()
        .ok_or(Error::MissingSpecification)
}

fn estimate_harris(spec: &FilterSpec) -> Result<usize> {
    let aa = stopband_attenuation(spec)?;
    to_tap_count(harris_taps(spec.normalized_transition_width(), aa))
}

fn estimate_bellanger(spec: &FilterSpec) -> Result<usize> {
    let aa = stopband_attenuation(spec)?;
    let ap = spec.required_passband_attenuation_db("estimating numtaps with bellanger")?;
    to_tap_count(bellanger_taps(
        spec.normalized_transition_width(),
        passband_ripple(ap),
        stopband_ripple(aa),
    ))
}

fn to_tap_count(estimate: f64) -> Result<usize> {
    if !estimate.is_finite() {
        return Err(Error::invalid(
            "numtaps",
            format!("estimate is not finite ({estimate})"),
        ));
    }
    Ok(estimate.max(1.0) as usize)
}
