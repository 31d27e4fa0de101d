//! Filter Design
pub use firls::firls;
pub use remez::remez;

/// Weighted least-squares design
pub mod firls;
/// Remez Algorithm
pub mod remez;

use crate::DesignError;

/// Validates band edges and returns them as `[lo, hi]` pairs in cycles per sample, i.e.,
/// divided by `fs` and therefore within `[0, 0.5]`.
pub(crate) fn normalize_bands(
    bands: &[f64],
    fs: Option<f64>,
) -> Result<Vec<[f64; 2]>, DesignError> {
    let fs = fs.unwrap_or(1.0);
    if !(fs.is_finite() && fs > 0.0) {
        return Err(DesignError::BandEdges(format!(
            "sampling frequency must be positive, got {fs}"
        )));
    }
    if bands.is_empty() || bands.len() % 2 == 1 {
        return Err(DesignError::BandCount(bands.len()));
    }

    let nyquist = fs / 2.0;
    if let Some(f) = bands
        .iter()
        .find(|f| !f.is_finite() || **f < 0.0 || **f > nyquist)
    {
        return Err(DesignError::BandEdges(format!(
            "edge {f} outside of [0, {nyquist}]"
        )));
    }

    let pairs: Vec<[f64; 2]> = bands
        .chunks_exact(2)
        .map(|b| [b[0] / fs, b[1] / fs])
        .collect();

    for (i, [lo, hi]) in pairs.iter().enumerate() {
        if hi <= lo {
            return Err(DesignError::BandEdges(format!(
                "band {i} has no width ({} to {})",
                lo * fs,
                hi * fs
            )));
        }
    }
    for (i, w) in pairs.windows(2).enumerate() {
        if w[1][0] < w[0][1] {
            return Err(DesignError::BandEdges(format!(
                "bands {i} and {} overlap",
                i + 1
            )));
        }
    }

    Ok(pairs)
}

/// Returns one weight per band, uniform if none are given.
pub(crate) fn band_weights(
    weights: Option<&[f64]>,
    num_bands: usize,
) -> Result<Vec<f64>, DesignError> {
    match weights {
        None => Ok(vec![1.0; num_bands]),
        Some(w) if w.len() != num_bands => Err(DesignError::LengthMismatch {
            what: "weights (one per band)",
            expected: num_bands,
            got: w.len(),
        }),
        Some(w) => match w.iter().find(|w| !(w.is_finite() && **w > 0.0)) {
            Some(&bad) => Err(DesignError::InvalidWeight(bad)),
            None => Ok(w.to_vec()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_by_sampling_frequency() {
        let bands = normalize_bands(&[0.0, 2000.0, 2500.0, 24000.0], Some(48000.0)).unwrap();
        assert_eq!(bands.len(), 2);
        assert!((bands[0][1] - 2000.0 / 48000.0).abs() < 1e-15);
        assert!((bands[1][1] - 0.5).abs() < 1e-15);

        let bands = normalize_bands(&[0.0, 0.2, 0.25, 0.5], None).unwrap();
        assert_eq!(bands, vec![[0.0, 0.2], [0.25, 0.5]]);
    }

    #[test]
    fn rejects_bad_edges() {
        assert_eq!(
            normalize_bands(&[0.0, 0.2, 0.25], None),
            Err(DesignError::BandCount(3))
        );
        assert!(matches!(
            normalize_bands(&[0.0, 0.2, 0.25, 0.6], None),
            Err(DesignError::BandEdges(_))
        ));
        assert!(matches!(
            normalize_bands(&[0.0, 0.3, 0.25, 0.5], None),
            Err(DesignError::BandEdges(_))
        ));
        assert!(matches!(
            normalize_bands(&[0.0, 0.2, 0.2, 0.2], None),
            Err(DesignError::BandEdges(_))
        ));
        assert!(matches!(
            normalize_bands(&[0.0, 0.2, 0.25, 0.5], Some(-1.0)),
            Err(DesignError::BandEdges(_))
        ));
    }

    #[test]
    fn weights() {
        assert_eq!(band_weights(None, 2).unwrap(), vec![1.0, 1.0]);
        assert_eq!(band_weights(Some(&[1.0, 3.0]), 2).unwrap(), vec![1.0, 3.0]);
        assert!(matches!(
            band_weights(Some(&[1.0]), 2),
            Err(DesignError::LengthMismatch { .. })
        ));
        assert_eq!(
            band_weights(Some(&[1.0, 0.0]), 2),
            Err(DesignError::InvalidWeight(0.0))
        );
    }
}
