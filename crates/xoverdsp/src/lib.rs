//! FIR design routines for two-way crossover networks.
//!
//! The crate provides the numerical back ends used by `firxover`:
//! * [`firdes::firls`] - weighted least-squares linear phase design,
//! * [`firdes::remez`] - Parks-McClellan equiripple design,
//! * [`response`] - frequency response evaluation of the resulting taps.
//!
//! Frequencies follow the convention of the sampling frequency `fs`: band edges are given in
//! `[0, fs / 2]`. Without a sampling frequency, `fs = 1` is assumed and edges are normalized
//! to `[0, 0.5]`.
#![warn(missing_docs)]

#[macro_use]
extern crate tracing;

pub use num_complex;

pub use error::DesignError;

mod error;
pub mod firdes;
pub mod response;
