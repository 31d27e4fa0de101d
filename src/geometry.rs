//! Band geometry of the crossover.
use crate::Error;
use crate::Result;

/// The two equivalent ways to place the transition band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandGeometry {
    /// Transition band centered on the crossover frequency.
    Crossover {
        /// Crossover frequency
        frequency: f64,
        /// Width of the transition band
        transition_width: f64,
    },
    /// Explicit band edges.
    Edges {
        /// End of the lowpass passband
        passband: f64,
        /// Start of the lowpass stopband
        stopband: f64,
    },
}

impl BandGeometry {
    /// Selects the geometry from the raw, optional inputs of a command line.
    ///
    /// Exactly one of `crossover` and `passband` must be given, each with its companion
    /// (`transition_width` and `stopband`, respectively).
    pub fn from_parts(
        crossover: Option<f64>,
        transition_width: Option<f64>,
        passband: Option<f64>,
        stopband: Option<f64>,
    ) -> Result<Self> {
        if crossover.is_some() && passband.is_some() {
            return Err(Error::InvalidParameterCombination(
                "--crossover-frequency and --passband-frequency are mutually exclusive".to_string(),
            ));
        }
        if transition_width.is_some() && stopband.is_some() {
            return Err(Error::InvalidParameterCombination(
                "--transition-width and --stopband-frequency are mutually exclusive".to_string(),
            ));
        }

        match (crossover, passband) {
            (Some(frequency), None) => match transition_width {
                Some(transition_width) => Ok(BandGeometry::Crossover {
                    frequency,
                    transition_width,
                }),
                None => Err(Error::InvalidParameterCombination(
                    "--transition-width must be set when using --crossover-frequency".to_string(),
                )),
            },
            (None, Some(passband)) => match stopband {
                Some(stopband) => Ok(BandGeometry::Edges { passband, stopband }),
                None => Err(Error::InvalidParameterCombination(
                    "--stopband-frequency must be set when using --passband-frequency".to_string(),
                )),
            },
            _ => Err(Error::InvalidParameterCombination(
                "either --crossover-frequency or --passband-frequency must be set".to_string(),
            )),
        }
    }

    /// Returns `(passband edge, stopband edge, transition width)`.
    pub fn edges(&self) -> (f64, f64, f64) {
        match *self {
            BandGeometry::Crossover {
                frequency,
                transition_width,
            } => (
                frequency - 0.5 * transition_width,
                frequency + 0.5 * transition_width,
                transition_width,
            ),
            BandGeometry::Edges { passband, stopband } => (passband, stopband, stopband - passband),
        }
    }
}

/// Resolved filter specification.
///
/// With a sampling frequency, all frequencies are in Hz. Without one, they are normalized,
/// with `0.5` being Nyquist.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    passband_edge: f64,
    stopband_edge: f64,
    transition_width: f64,
    sampling_frequency: Option<f64>,
    passband_attenuation_db: Option<f64>,
    stopband_attenuation_db: Option<f64>,
}

impl FilterSpec {
    /// Resolves the geometry and checks that `stopband edge > passband edge > 0`.
    ///
    /// Edges beyond Nyquist are not rejected here; the design routines report them.
    pub fn new(
        geometry: BandGeometry,
        sampling_frequency: Option<f64>,
        passband_attenuation_db: Option<f64>,
        stopband_attenuation_db: Option<f64>,
    ) -> Result<Self> {
        if let Some(fs) = sampling_frequency {
            positive("sampling frequency", fs)?;
        }
        // positivity of Ap is checked by the rules that use it
        if let Some(ap) = passband_attenuation_db.filter(|ap| !ap.is_finite()) {
            return Err(Error::invalid(
                "passband attenuation",
                format!("must be finite, got {ap}"),
            ));
        }
        if let Some(aa) = stopband_attenuation_db {
            positive("stopband attenuation", aa)?;
        }

        let (passband_edge, stopband_edge, transition_width) = geometry.edges();
        if let BandGeometry::Crossover {
            frequency,
            transition_width,
        } = geometry
        {
            positive("crossover frequency", frequency)?;
            positive("transition width", transition_width)?;
        }
        if !passband_edge.is_finite() || passband_edge <= 0.0 {
            return Err(Error::invalid(
                "passband frequency",
                format!("must be positive, got {passband_edge}"),
            ));
        }
        if !stopband_edge.is_finite() || stopband_edge <= passband_edge {
            return Err(Error::invalid(
                "stopband frequency",
                format!(
                    "must be above the passband frequency {passband_edge}, got {stopband_edge}"
                ),
            ));
        }

        Ok(FilterSpec {
            passband_edge,
            stopband_edge,
            transition_width,
            sampling_frequency,
            passband_attenuation_db,
            stopband_attenuation_db,
        })
    }

    /// End of the lowpass passband.
    pub fn passband_edge(&self) -> f64 {
        self.passband_edge
    }

    /// Start of the lowpass stopband.
    pub fn stopband_edge(&self) -> f64 {
        self.stopband_edge
    }

    /// Width of the transition band.
    pub fn transition_width(&self) -> f64 {
        self.transition_width
    }

    /// Sampling frequency in Hz, if frequencies are not normalized.
    pub fn sampling_frequency(&self) -> Option<f64> {
        self.sampling_frequency
    }

    /// Permissible passband attenuation (ripple) in dB.
    pub fn passband_attenuation_db(&self) -> Option<f64> {
        self.passband_attenuation_db
    }

    /// Passband attenuation for a computation that depends on it: present and positive.
    pub(crate) fn required_passband_attenuation_db(&self, context: &'static str) -> Result<f64> {
        let ap = self
            .passband_attenuation_db
            .ok_or(Error::MissingParameter {
                name: "--passband-attenuation",
                context,
            })?;
        positive("passband attenuation", ap)?;
        Ok(ap)
    }

    /// Stopband attenuation in dB.
    pub fn stopband_attenuation_db(&self) -> Option<f64> {
        self.stopband_attenuation_db
    }

    /// Transition width in cycles per sample.
    pub fn normalized_transition_width(&self) -> f64 {
        match self.sampling_frequency {
            Some(fs) => self.transition_width / fs,
            None => self.transition_width,
        }
    }

    /// Upper end of the frequency axis: `fs / 2`, or `0.5` when normalized.
    pub fn nyquist(&self) -> f64 {
        self.sampling_frequency.map_or(0.5, |fs| 0.5 * fs)
    }

    /// Band edges `[0, passband, stopband, nyquist]` handed to the design routines.
    pub fn band_edges(&self) -> [f64; 4] {
        [0.0, self.passband_edge, self.stopband_edge, self.nyquist()]
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(name, format!("must be positive, got {value}")))
    }
}
