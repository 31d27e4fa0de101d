use std::result;
use thiserror::Error;
use xoverdsp::DesignError;

/// Crossover design error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Mutually exclusive or dependent parameters were combined in an unsupported way.
    #[error("invalid parameter combination: {0}")]
    InvalidParameterCombination(String),
    /// A parameter is out of its valid range.
    #[error("invalid {name}: {reason}")]
    InvalidParameter {
        /// Name of the parameter
        name: &'static str,
        /// What is wrong with it
        reason: String,
    },
    /// Neither a tap count nor a stopband attenuation was given.
    #[error("either a number of taps or a stopband attenuation must be provided")]
    MissingSpecification,
    /// A parameter required by the chosen method is absent.
    #[error("{name} must be provided when {context}")]
    MissingParameter {
        /// Name of the missing parameter
        name: &'static str,
        /// Operation that requires it
        context: &'static str,
    },
    /// The fixed point format string could not be parsed.
    #[error(
        "invalid fixed point format `{0}`: expected signed `Qm.n`, `Qn` or `fxp-sm/n` with at most 64 bits"
    )]
    InvalidFormatString(String),
    /// The design routine could not satisfy the band geometry or filter length.
    #[error(transparent)]
    DesignInfeasible(#[from] DesignError),
}

/// Result type with [`Error`].
pub type Result<T> = result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = Error::MissingParameter {
            name: "passband attenuation",
            context: "using the bellanger estimator",
        };
        assert_eq!(
            err.to_string(),
            "passband attenuation must be provided when using the bellanger estimator"
        );

        let err = Error::invalid("stopband attenuation", "must be positive, got -3");
        assert_eq!(
            err.to_string(),
            "invalid stopband attenuation: must be positive, got -3"
        );
    }

    #[test]
    fn design_errors_are_transparent() {
        let inner = DesignError::EvenTapCount(4);
        let err = Error::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err, Error::DesignInfeasible(inner));
    }
}
