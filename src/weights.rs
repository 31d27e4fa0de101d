//! Error weights for the passband and stopband.
use crate::Error;
use crate::FilterSpec;
use crate::Result;
use crate::ripple::passband_ripple;
use crate::ripple::stopband_ripple;

/// Per-band error weights of the lowpass and the highpass.
///
/// With `r = dp / da`, the lowpass is weighted `[1, r]` and the highpass `[r, 1]`, so that
/// the band that has to be attenuated is weighted by the ripple ratio in both filters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandWeights {
    /// Weights of the lowpass `[passband, stopband]`
    pub lowpass: [f64; 2],
    /// Weights of the highpass `[stopband, passband]`
    pub highpass: [f64; 2],
}

impl BandWeights {
    /// Derives the weights from the passband and stopband attenuation of `spec`.
    pub fn new(spec: &FilterSpec) -> Result<Self> {
        let ap = spec.required_passband_attenuation_db("weighing taps")?;
        let aa = spec
            .stopband_attenuation_db()
            .ok_or(Error::MissingParameter {
                name: "--stopband-attenuation",
                context: "weighing taps",
            })?;
        Ok(Self::from_ratio(passband_ripple(ap) / stopband_ripple(aa)))
    }

    /// Weights for a ripple ratio `r = dp / da`.
    pub fn from_ratio(r: f64) -> Self {
        BandWeights {
            lowpass: [1.0, r],
            highpass: [r, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BandGeometry;

    fn spec(ap: Option<f64>, aa: Option<f64>) -> FilterSpec {
        let g = BandGeometry::Edges {
            passband: 0.2,
            stopband: 0.25,
        };
        FilterSpec::new(g, None, ap, aa).unwrap()
    }

    #[test]
    fn symmetric() {
        let w = BandWeights::new(&spec(Some(1.0), Some(60.0))).unwrap();
        let r = w.lowpass[1];
        assert!((r - 57.501_127_784_5).abs() < 1e-6);
        assert_eq!(w.lowpass, [1.0, r]);
        assert_eq!(w.highpass, [r, 1.0]);
    }

    #[test]
    fn needs_both_attenuations() {
        assert!(matches!(
            BandWeights::new(&spec(None, Some(60.0))),
            Err(Error::MissingParameter {
                name: "--passband-attenuation",
                ..
            })
        ));
        assert!(matches!(
            BandWeights::new(&spec(Some(1.0), None)),
            Err(Error::MissingParameter {
                name: "--stopband-attenuation",
                ..
            })
        ));
    }

    #[test]
    fn zero_passband_attenuation() {
        assert!(matches!(
            BandWeights::new(&spec(Some(0.0), Some(60.0))),
            Err(Error::InvalidParameter {
                name: "passband attenuation",
                ..
            })
        ));
    }
}
