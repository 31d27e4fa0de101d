//! Crossover design pipeline.
use crate::BandGeometry;
use crate::BandWeights;
use crate::Error;
use crate::FilterSpec;
use crate::FirAlgorithm;
use crate::FixedPointFormat;
use crate::QuantizedTaps;
use crate::Result;
use crate::TapEstimator;

/// Parameters of a crossover design.
///
/// Example usage:
/// ```
/// use firxover::BandGeometry;
/// use firxover::DesignParams;
///
/// let params = DesignParams::new(BandGeometry::Edges {
///     passband: 0.2,
///     stopband: 0.25,
/// })
/// .with_stopband_attenuation(60.0);
///
/// let design = firxover::design(&params).unwrap();
/// assert_eq!(design.num_taps(), 55);
/// assert_eq!(design.lowpass().len(), 55);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DesignParams {
    geometry: BandGeometry,
    sampling_frequency: Option<f64>,
    passband_attenuation_db: Option<f64>,
    stopband_attenuation_db: Option<f64>,
    num_taps: Option<usize>,
    estimator: Option<TapEstimator>,
    algorithm: FirAlgorithm,
    weigh_taps: bool,
    fixed_point_format: Option<String>,
    fixed_point_only: bool,
}

impl DesignParams {
    /// Parameters for `geometry` with everything else unset.
    pub fn new(geometry: BandGeometry) -> Self {
        DesignParams {
            geometry,
            sampling_frequency: None,
            passband_attenuation_db: None,
            stopband_attenuation_db: None,
            num_taps: None,
            estimator: None,
            algorithm: FirAlgorithm::default(),
            weigh_taps: false,
            fixed_point_format: None,
            fixed_point_only: false,
        }
    }

    /// Give frequencies in Hz for sampling frequency `fs`.
    pub fn with_sampling_frequency(mut self, fs: f64) -> Self {
        self.sampling_frequency = Some(fs);
        self
    }

    /// Permissible passband attenuation in dB.
    pub fn with_passband_attenuation(mut self, ap: f64) -> Self {
        self.passband_attenuation_db = Some(ap);
        self
    }

    /// Stopband attenuation in dB.
    pub fn with_stopband_attenuation(mut self, aa: f64) -> Self {
        self.stopband_attenuation_db = Some(aa);
        self
    }

    /// Use `num_taps` instead of estimating the filter length.
    pub fn with_num_taps(mut self, num_taps: usize) -> Self {
        self.num_taps = Some(num_taps);
        self
    }

    /// Force an estimator. By default, it is chosen with [`TapEstimator::auto`].
    pub fn with_estimator(mut self, estimator: TapEstimator) -> Self {
        self.estimator = Some(estimator);
        self
    }

    /// FIR design method.
    pub fn with_algorithm(mut self, algorithm: FirAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Weigh passband and stopband errors by the ripple ratio.
    pub fn with_weights(mut self, weigh_taps: bool) -> Self {
        self.weigh_taps = weigh_taps;
        self
    }

    /// Also quantize taps to the fixed-point `format`, e.g., `Q1.15`.
    pub fn with_fixed_point_format(mut self, format: impl Into<String>) -> Self {
        self.fixed_point_format = Some(format.into());
        self
    }

    /// Only export fixed-point taps.
    pub fn with_fixed_point_only(mut self, fixed_point_only: bool) -> Self {
        self.fixed_point_only = fixed_point_only;
        self
    }

    /// FIR design method.
    pub fn algorithm(&self) -> FirAlgorithm {
        self.algorithm
    }
}

/// Result of a crossover design.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossoverDesign {
    spec: FilterSpec,
    num_taps: usize,
    estimated: bool,
    lowpass: Vec<f64>,
    highpass: Vec<f64>,
    quantized: Option<QuantizedTaps>,
    export_float: bool,
}

impl CrossoverDesign {
    /// Resolved filter specification.
    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Number of taps passed to the design method.
    ///
    /// The filters may be one tap shorter, see [`FirAlgorithm::design`].
    pub fn num_taps(&self) -> usize {
        self.num_taps
    }

    /// Whether [`num_taps`](Self::num_taps) was estimated.
    pub fn is_estimated(&self) -> bool {
        self.estimated
    }

    /// Lowpass taps.
    pub fn lowpass(&self) -> &[f64] {
        &self.lowpass
    }

    /// Highpass taps.
    pub fn highpass(&self) -> &[f64] {
        &self.highpass
    }

    /// Fixed-point taps, if a format was requested.
    pub fn quantized(&self) -> Option<&QuantizedTaps> {
        self.quantized.as_ref()
    }

    /// Whether floating point taps should be exported.
    pub fn export_float(&self) -> bool {
        self.export_float
    }
}

/// Designs the lowpass and highpass of a two-way crossover.
///
/// An invalid fixed-point format is reported before any design work. Errors are final; no
/// partial design is returned.
pub fn design(params: &DesignParams) -> Result<CrossoverDesign> {
    let format = match (&params.fixed_point_format, params.fixed_point_only) {
        (Some(s), _) => Some(s.parse::<FixedPointFormat>()?),
        (None, true) => {
            return Err(Error::InvalidParameterCombination(
                "--fixed-point-only requires --fixed-point-format".to_string(),
            ));
        }
        (None, false) => None,
    };

    let spec = FilterSpec::new(
        params.geometry,
        params.sampling_frequency,
        params.passband_attenuation_db,
        params.stopband_attenuation_db,
    )?;
    debug!(
        "passband edge {}, stopband edge {}, transition width {}",
        spec.passband_edge(),
        spec.stopband_edge(),
        spec.transition_width()
    );

    let (num_taps, estimated) = match params.num_taps {
        Some(0) => return Err(Error::invalid("numtaps", "must be at least 1")),
        Some(n) => (n, false),
        None => {
            if spec.stopband_attenuation_db().is_none() {
                return Err(Error::MissingSpecification);
            }
            let estimator = params
                .estimator
                .unwrap_or_else(|| TapEstimator::auto(&spec));
            debug!("estimating numtaps with {estimator}");
            (estimator.estimate(&spec)?, true)
        }
    };

    let weights = if params.weigh_taps {
        Some(BandWeights::new(&spec)?)
    } else {
        None
    };

    let taps = params.algorithm.design(num_taps, &spec, weights.as_ref())?;
    let quantized = format.map(|f| QuantizedTaps::new(f, &taps.lowpass, &taps.highpass));

    Ok(CrossoverDesign {
        spec,
        num_taps,
        estimated,
        lowpass: taps.lowpass,
        highpass: taps.highpass,
        quantized,
        export_float: !params.fixed_point_only,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> DesignParams {
        DesignParams::new(BandGeometry::Edges {
            passband: 0.2,
            stopband: 0.25,
        })
    }

    #[test]
    fn estimated() {
        let d = design(&params().with_stopband_attenuation(60.0)).unwrap();
        assert_eq!(d.num_taps(), 55);
        assert!(d.is_estimated());
        assert_eq!(d.spec().band_edges(), [0.0, 0.2, 0.25, 0.5]);
        assert_eq!(d.lowpass().len(), 55);
        assert_eq!(d.highpass().len(), 55);
        assert!(d.quantized().is_none());
        assert!(d.export_float());
    }

    #[test]
    fn explicit_num_taps() {
        let d = design(&params().with_num_taps(31)).unwrap();
        assert_eq!(d.num_taps(), 31);
        assert!(!d.is_estimated());
        assert_eq!(d.lowpass().len(), 31);
    }

    #[test]
    fn forced_estimator() {
        let p = params()
            .with_passband_attenuation(1.0)
            .with_stopband_attenuation(60.0);
        assert_eq!(design(&p).unwrap().num_taps(), 44);
        let p = p.with_estimator(TapEstimator::Harris);
        assert_eq!(design(&p).unwrap().num_taps(), 55);
    }

    #[test]
    fn missing_specification() {
        assert_eq!(design(&params()), Err(Error::MissingSpecification));
        assert!(matches!(
            design(&params().with_num_taps(0)),
            Err(Error::InvalidParameter { name: "numtaps", .. })
        ));
    }

    #[test]
    fn format_fails_fast() {
        // would also fail for missing attenuations
        let p = params().with_fixed_point_format("garbage");
        assert_eq!(
            design(&p),
            Err(Error::InvalidFormatString("garbage".to_string()))
        );
        let p = params().with_fixed_point_only(true);
        assert!(matches!(
            design(&p),
            Err(Error::InvalidParameterCombination(_))
        ));
    }

    #[test]
    fn fixed_point() {
        let d = design(
            &params()
                .with_stopband_attenuation(60.0)
                .with_fixed_point_format("Q1.15")
                .with_fixed_point_only(true),
        )
        .unwrap();
        assert!(!d.export_float());
        let q = d.quantized().unwrap();
        assert_eq!(q.format.to_string(), "fxp-s16/15");
        assert_eq!(q.lowpass.len(), d.lowpass().len());
        assert_eq!(q.lowpass[27], q.format.quantize(d.lowpass()[27]));
    }
}
