#![warn(missing_docs)]

//! Tap generator for two-way FIR crossover networks.
//!
//! Designs a linear phase lowpass/highpass pair that splits a signal at a crossover
//! frequency:
//! * the transition band is given either by a crossover frequency and a transition width, or
//!   by explicit passband and stopband edges,
//! * the filter length is given or estimated from the required attenuation,
//! * taps are designed with weighted least squares (`firls`) or Parks-McClellan (`remez`),
//! * taps can be quantized to a signed fixed-point format for DSP hardware.
//!
//! ## Example
//! ```
//! use firxover::BandGeometry;
//! use firxover::DesignParams;
//!
//! fn main() -> firxover::Result<()> {
//!     let params = DesignParams::new(BandGeometry::Crossover {
//!         frequency: 2000.0,
//!         transition_width: 1000.0,
//!     })
//!     .with_sampling_frequency(48000.0)
//!     .with_stopband_attenuation(60.0)
//!     .with_fixed_point_format("Q1.15");
//!
//!     let design = firxover::design(&params)?;
//!     assert_eq!(design.lowpass().len(), design.num_taps());
//!     assert!(design.quantized().is_some());
//!
//!     Ok(())
//! }
//! ```

/// Logging macro
#[macro_use]
pub extern crate tracing;

// re-exports
pub use xoverdsp;

pub mod config;
mod crossover;
mod designer;
mod error;
mod estimator;
pub mod export;
mod fixed_point;
mod geometry;
pub mod logging;
pub mod ripple;
mod weights;

pub use crossover::CrossoverDesign;
pub use crossover::DesignParams;
pub use crossover::design;
pub use designer::CrossoverTaps;
pub use designer::FirAlgorithm;
pub use designer::HIGHPASS_RESPONSE;
pub use designer::LOWPASS_RESPONSE;
pub use designer::force_odd;
pub use error::Error;
pub use error::Result;
pub use estimator::TapEstimator;
pub use estimator::bellanger_taps;
pub use estimator::harris_taps;
pub use fixed_point::FixedPointFormat;
pub use fixed_point::QuantizedTaps;
pub use geometry::BandGeometry;
pub use geometry::FilterSpec;
pub use weights::BandWeights;
