// Least-squares linear phase FIR design.
//
// The filter is found by minimizing the weighted integral squared error between the
// zero-phase response A(f) = sum_k a[k] cos(pi k f) and the piecewise linear desired
// response over all bands. The normal equations Q a = b have a Toeplitz-plus-Hankel
// matrix Q, whose entries as well as b are integrated in closed form per band.

use nalgebra::DMatrix;
use nalgebra::DVector;
use std::f64::consts::PI;

use super::band_weights;
use super::normalize_bands;
use crate::DesignError;

/// Designs a Type I linear phase FIR filter with minimum weighted squared error.
///
/// * `num_taps` - filter length, must be odd.
/// * `bands` - band edges as consecutive `[lo, hi]` pairs in `[0, fs / 2]`. Gaps between
///   bands are "don't care" regions.
/// * `desired` - desired gain at every band edge, linear in between.
/// * `weights` - error weight per band, uniform if `None`.
/// * `fs` - sampling frequency, `1.0` if `None`.
///
/// Example usage:
/// ```
/// use xoverdsp::firdes;
///
/// let taps = firdes::firls(31, &[0.0, 0.2, 0.3, 0.5], &[1.0, 1.0, 0.0, 0.0], None, None).unwrap();
/// assert_eq!(taps.len(), 31);
/// ```
pub fn firls(
    num_taps: usize,
    bands: &[f64],
    desired: &[f64],
    weights: Option<&[f64]>,
    fs: Option<f64>,
) -> Result<Vec<f64>, DesignError> {
    if num_taps == 0 {
        return Err(DesignError::InvalidTapCount { num_taps, min: 1 });
    }
    if num_taps % 2 == 0 {
        return Err(DesignError::EvenTapCount(num_taps));
    }

    // band edges relative to Nyquist, i.e., in [0, 1]
    let bands: Vec<[f64; 2]> = normalize_bands(bands, fs)?
        .into_iter()
        .map(|[lo, hi]| [2.0 * lo, 2.0 * hi])
        .collect();
    if desired.len() != 2 * bands.len() {
        return Err(DesignError::LengthMismatch {
            what: "desired gains (one per band edge)",
            expected: 2 * bands.len(),
            got: desired.len(),
        });
    }
    let weights = band_weights(weights, bands.len())?;

    let m = (num_taps - 1) / 2;

    // q[n] = sum over bands of W * integral cos(pi n f) df
    let q: Vec<f64> = (0..num_taps)
        .map(|n| {
            let n = n as f64;
            bands
                .iter()
                .zip(&weights)
                .map(|(&[f1, f2], &w)| w * (f2 * sinc(f2 * n) - f1 * sinc(f1 * n)))
                .sum()
        })
        .collect();
    let system = DMatrix::from_fn(m + 1, m + 1, |i, j| q[i.abs_diff(j)] + q[i + j]);

    let rhs = DVector::from_fn(m + 1, |n, _| {
        bands
            .iter()
            .zip(desired.chunks_exact(2))
            .zip(&weights)
            .map(|((&[f1, f2], gain), &w)| {
                let slope = (gain[1] - gain[0]) / (f2 - f1);
                let offset = gain[0] - f1 * slope;
                w * (projection(n, f2, slope, offset) - projection(n, f1, slope, offset))
            })
            .sum()
    });

    let a: Vec<f64> = solve(system, rhs)?.iter().copied().collect();

    let mut taps = Vec::with_capacity(num_taps);
    taps.extend(a[1..].iter().rev());
    taps.push(2.0 * a[0]);
    taps.extend(&a[1..]);
    Ok(taps)
}

/// Normalized sinc, `sin(pi x) / (pi x)`.
fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// Antiderivative of `(slope * f + offset) * cos(pi n f)` at `f`, scaled by `pi`.
fn projection(n: usize, f: f64, slope: f64, offset: f64) -> f64 {
    let base = f * (slope * f + offset) * sinc(f * n as f64);
    if n == 0 {
        base - slope * f * f / 2.0
    } else {
        let n = n as f64;
        base + slope * (PI * n * f).cos() / (PI * n).powi(2)
    }
}

fn solve(system: DMatrix<f64>, rhs: DVector<f64>) -> Result<DVector<f64>, DesignError> {
    if let Some(cholesky) = system.clone().cholesky() {
        let a = cholesky.solve(&rhs);
        if a.iter().all(|v| v.is_finite()) {
            return Ok(a);
        }
    }

    warn!("least-squares system is not positive definite, falling back to SVD");
    let a = system
        .svd(true, true)
        .solve(&rhs, 1e-12)
        .map_err(|_| DesignError::Singular)?;
    if a.iter().all(|v| v.is_finite()) {
        Ok(a)
    } else {
        Err(DesignError::Singular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::magnitude;

    #[test]
    fn lowpass() {
        let taps = firls(55, &[0.0, 0.2, 0.25, 0.5], &[1.0, 1.0, 0.0, 0.0], None, None).unwrap();
        assert_eq!(taps.len(), 55);
        assert!((magnitude(&taps, 0.0) - 1.0).abs() < 0.02);
        assert!((magnitude(&taps, 0.1) - 1.0).abs() < 0.02);
        assert!(magnitude(&taps, 0.35) < 0.02);
        assert!(magnitude(&taps, 0.5) < 0.02);
    }

    #[test]
    fn highpass_in_hz() {
        let fs = 48_000.0;
        let taps = firls(
            101,
            &[0.0, 2000.0, 3000.0, 24000.0],
            &[0.0, 0.0, 1.0, 1.0],
            None,
            Some(fs),
        )
        .unwrap();
        assert_eq!(taps.len(), 101);
        assert!(magnitude(&taps, 0.0) < 0.02);
        assert!((magnitude(&taps, 10_000.0 / fs) - 1.0).abs() < 0.02);
        assert!((magnitude(&taps, 0.5) - 1.0).abs() < 0.02);
    }

    #[test]
    fn symmetric() {
        let taps = firls(
            21,
            &[0.0, 0.1, 0.2, 0.5],
            &[1.0, 1.0, 0.0, 0.0],
            Some(&[1.0, 10.0]),
            None,
        )
        .unwrap();
        for i in 0..taps.len() {
            assert_eq!(taps[i], taps[taps.len() - 1 - i]);
        }
    }

    #[test]
    fn stopband_weight() {
        let bands = [0.0, 0.2, 0.25, 0.5];
        let desired = [1.0, 1.0, 0.0, 0.0];
        let plain = firls(31, &bands, &desired, None, None).unwrap();
        let weighted = firls(31, &bands, &desired, Some(&[1.0, 100.0]), None).unwrap();

        let stopband_energy = |taps: &[f64]| -> f64 {
            (0..=100)
                .map(|i| magnitude(taps, 0.25 + 0.25 * i as f64 / 100.0).powi(2))
                .sum()
        };
        assert!(stopband_energy(&weighted) < stopband_energy(&plain));
    }

    #[test]
    fn single_tap() {
        // a constant fitted to 1 on [0, 0.2] and 0 on [0.3, 0.5]
        let taps = firls(1, &[0.0, 0.2, 0.3, 0.5], &[1.0, 1.0, 0.0, 0.0], None, None).unwrap();
        assert_eq!(taps.len(), 1);
        assert!((taps[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn invalid_arguments() {
        let bands = [0.0, 0.2, 0.25, 0.5];
        let desired = [1.0, 1.0, 0.0, 0.0];
        assert_eq!(
            firls(54, &bands, &desired, None, None),
            Err(DesignError::EvenTapCount(54))
        );
        assert!(matches!(
            firls(0, &bands, &desired, None, None),
            Err(DesignError::InvalidTapCount { .. })
        ));
        assert!(matches!(
            firls(55, &bands, &[1.0, 0.0], None, None),
            Err(DesignError::LengthMismatch { .. })
        ));
        assert!(matches!(
            firls(55, &[0.0, 0.2, 0.25, 0.7], &desired, None, None),
            Err(DesignError::BandEdges(_))
        ));
    }
}
