use thiserror::Error;

/// Errors reported by the design routines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    /// The filter is too short for the chosen method.
    #[error("number of taps must be at least {min}, got {num_taps}")]
    InvalidTapCount {
        /// Requested number of taps
        num_taps: usize,
        /// Smallest supported number of taps
        min: usize,
    },
    /// Least-squares design only produces Type I (odd length) filters.
    #[error("least-squares design needs an odd number of taps, got {0}")]
    EvenTapCount(usize),
    /// Band edges have to come in `[lo, hi]` pairs.
    #[error("band edges must come in non-empty pairs, got {0} edges")]
    BandCount(usize),
    /// An argument has the wrong number of entries.
    #[error("expected {expected} {what}, got {got}")]
    LengthMismatch {
        /// Name of the argument
        what: &'static str,
        /// Expected number of entries
        expected: usize,
        /// Actual number of entries
        got: usize,
    },
    /// Band edges are not ordered or do not fit into `[0, fs / 2]`.
    #[error("invalid band edges: {0}")]
    BandEdges(String),
    /// Band weights have to be positive.
    #[error("band weights must be positive and finite, got {0}")]
    InvalidWeight(f64),
    /// The Remez exchange produced no usable filter.
    #[error(
        "remez failed to converge after {0} iterations, try reducing the transition band width"
    )]
    NoConvergence(usize),
    /// The error curve has fewer alternating extrema than the exchange needs.
    #[error("insufficient extremal frequencies, cannot continue")]
    InsufficientExtrema,
    /// The equiripple solver rejected the design, e.g., a Type II filter asked to pass
    /// Nyquist.
    #[error("remez: {0}")]
    Remez(String),
    /// The least-squares normal equations have no usable solution.
    #[error("least-squares system could not be solved")]
    Singular,
}

impl From<pm_remez::error::Error> for DesignError {
    fn from(e: pm_remez::error::Error) -> Self {
        use pm_remez::error::Error;
        match e {
            Error::BandsEmpty => DesignError::BandCount(0),
            Error::BandLimitsWrongOrder | Error::BandLimitsOutOfBounds | Error::BandsOverlap => {
                DesignError::BandEdges(e.to_string())
            }
            Error::NotEnoughExtrema => DesignError::InsufficientExtrema,
            e => DesignError::Remez(e.to_string()),
        }
    }
}
