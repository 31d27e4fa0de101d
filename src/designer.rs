//! Lowpass and highpass design with the FIR design routines of [`xoverdsp`].
use std::fmt;
use std::str::FromStr;
use xoverdsp::firdes;
use xoverdsp::response;

use crate::BandWeights;
use crate::Error;
use crate::FilterSpec;
use crate::Result;

/// Ideal lowpass gain at the band edges `[0, fp, fa, nyquist]`.
pub const LOWPASS_RESPONSE: [f64; 4] = [1.0, 1.0, 0.0, 0.0];
/// Ideal highpass gain at the band edges `[0, fp, fa, nyquist]`.
pub const HIGHPASS_RESPONSE: [f64; 4] = [0.0, 0.0, 1.0, 1.0];

/// FIR design method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FirAlgorithm {
    /// Weighted least squares (`firls`).
    #[default]
    LeastSquares,
    /// Parks-McClellan equiripple (`remez`).
    Equiripple,
}

type StrategyFn = fn(usize, &FilterSpec, Option<&BandWeights>) -> Result<CrossoverTaps>;

impl FirAlgorithm {
    fn strategy(self) -> StrategyFn {
        match self {
            FirAlgorithm::LeastSquares => least_squares,
            FirAlgorithm::Equiripple => equiripple,
        }
    }

    /// Designs the lowpass and highpass of the crossover with `num_taps` taps.
    ///
    /// Least squares needs odd filters, so an even `num_taps` is reduced by one for both.
    /// Equiripple uses `num_taps` for the lowpass and only forces the highpass to be odd,
    /// since an even length highpass would have a zero at Nyquist.
    pub fn design(
        self,
        num_taps: usize,
        spec: &FilterSpec,
        weights: Option<&BandWeights>,
    ) -> Result<CrossoverTaps> {
        debug!("designing crossover with {self}, {num_taps} taps, weights {weights:?}");
        let taps = self.strategy()(num_taps, spec, weights)?;
        log_gains("lowpass", &taps.lowpass, spec);
        log_gains("highpass", &taps.highpass, spec);
        Ok(taps)
    }
}

impl fmt::Display for FirAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FirAlgorithm::LeastSquares => write!(f, "firls"),
            FirAlgorithm::Equiripple => write!(f, "remez"),
        }
    }
}

impl FromStr for FirAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firls" => Ok(FirAlgorithm::LeastSquares),
            "remez" => Ok(FirAlgorithm::Equiripple),
            _ => Err(Error::invalid(
                "fir algorithm",
                format!("expected `firls` or `remez`, got `{s}`"),
            )),
        }
    }
}

/// Taps of the two crossover filters.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossoverTaps {
    /// Lowpass taps
    pub lowpass: Vec<f64>,
    /// Highpass taps
    pub highpass: Vec<f64>,
}

/// Largest odd number not above `num_taps` (`1` stays `1`).
pub fn force_odd(num_taps: usize) -> usize {
    if num_taps % 2 == 0 {
        num_taps.saturating_sub(1).max(1)
    } else {
        num_taps
    }
}

fn least_squares(
    num_taps: usize,
    spec: &FilterSpec,
    weights: Option<&BandWeights>,
) -> Result<CrossoverTaps> {
    let n = force_odd(num_taps);
    let bands = spec.band_edges();
    let fs = spec.sampling_frequency();

    let lowpass = firdes::firls(
        n,
        &bands,
        &LOWPASS_RESPONSE,
        weights.map(|w| &w.lowpass[..]),
        fs,
    )?;
    let highpass = firdes::firls(
        n,
        &bands,
        &HIGHPASS_RESPONSE,
        weights.map(|w| &w.highpass[..]),
        fs,
    )?;
    Ok(CrossoverTaps { lowpass, highpass })
}

fn equiripple(
    num_taps: usize,
    spec: &FilterSpec,
    weights: Option<&BandWeights>,
) -> Result<CrossoverTaps> {
    let bands = spec.band_edges();
    let fs = spec.sampling_frequency();

    let lowpass = firdes::remez(
        num_taps,
        &bands,
        &[LOWPASS_RESPONSE[0], LOWPASS_RESPONSE[2]],
        weights.map(|w| &w.lowpass[..]),
        fs,
    )?;
    let highpass = firdes::remez(
        force_odd(num_taps),
        &bands,
        &[HIGHPASS_RESPONSE[0], HIGHPASS_RESPONSE[2]],
        weights.map(|w| &w.highpass[..]),
        fs,
    )?;
    Ok(CrossoverTaps { lowpass, highpass })
}

fn log_gains(name: &str, taps: &[f64], spec: &FilterSpec) {
    let fs = spec.sampling_frequency().unwrap_or(1.0);
    debug!(
        "{name}: {} taps, {:.2} dB at {}, {:.2} dB at {}, {:.2} dB at DC, {:.2} dB at Nyquist",
        taps.len(),
        response::magnitude_db(taps, spec.passband_edge() / fs),
        spec.passband_edge(),
        response::magnitude_db(taps, spec.stopband_edge() / fs),
        spec.stopband_edge(),
        response::magnitude_db(taps, 0.0),
        response::magnitude_db(taps, 0.5),
    );
}
