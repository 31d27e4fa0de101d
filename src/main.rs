use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use firxover::BandGeometry;
use firxover::DesignParams;
use firxover::FirAlgorithm;
use firxover::TapEstimator;
use firxover::config::Config;
use firxover::export;
use firxover::logging;

/// Generate taps for a two-way FIR crossover.
///
/// Give the transition band either with a crossover frequency and a transition width or with
/// a passband and a stopband frequency. Frequencies are normalized (0.5 is Nyquist) unless a
/// sampling frequency is set.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Crossover frequency
    #[clap(long, visible_alias = "fc", conflicts_with = "passband_frequency")]
    crossover_frequency: Option<f64>,
    /// Transition width, centered on the crossover frequency
    #[clap(long, visible_alias = "bt", conflicts_with = "stopband_frequency")]
    transition_width: Option<f64>,
    /// End of the lowpass passband
    #[clap(long, visible_alias = "fp")]
    passband_frequency: Option<f64>,
    /// Start of the lowpass stopband
    #[clap(long, visible_alias = "fa")]
    stopband_frequency: Option<f64>,
    /// Permissible passband attenuation (ripple) in dB
    #[clap(long, visible_alias = "ap")]
    passband_attenuation: Option<f64>,
    /// Stopband attenuation in dB
    #[clap(long, visible_alias = "aa")]
    stopband_attenuation: Option<f64>,
    /// Number of taps, estimated if not set
    #[clap(short = 'N', long)]
    numtaps: Option<usize>,
    /// Estimator for the number of taps [harris, bellanger]
    #[clap(long)]
    numtaps_finder: Option<TapEstimator>,
    /// FIR design method [firls, remez]
    #[clap(long)]
    fir_algorithm: Option<FirAlgorithm>,
    /// Weigh passband and stopband errors by the ripple ratio
    #[clap(short, long)]
    weigh_taps: bool,
    /// Output directory, defaults to the working directory
    #[clap(short, long)]
    output_path: Option<PathBuf>,
    /// Sampling frequency in Hz
    #[clap(long, visible_alias = "fs")]
    sampling_frequency: Option<f64>,
    /// Fixed-point format of exported taps, e.g., Q1.15, Q15 or fxp-s16/15
    #[clap(long, visible_alias = "fxp")]
    fixed_point_format: Option<String>,
    /// Only export fixed-point taps
    #[clap(long, visible_alias = "fxpo")]
    fixed_point_only: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load();
    logging::init(config.log_level);

    let geometry = BandGeometry::from_parts(
        args.crossover_frequency,
        args.transition_width,
        args.passband_frequency,
        args.stopband_frequency,
    )?;

    let mut params = DesignParams::new(geometry)
        .with_algorithm(args.fir_algorithm.unwrap_or(config.fir_algorithm))
        .with_weights(args.weigh_taps)
        .with_fixed_point_only(args.fixed_point_only);
    if let Some(fs) = args.sampling_frequency {
        params = params.with_sampling_frequency(fs);
    }
    if let Some(ap) = args.passband_attenuation {
        params = params.with_passband_attenuation(ap);
    }
    if let Some(aa) = args.stopband_attenuation {
        params = params.with_stopband_attenuation(aa);
    }
    if let Some(n) = args.numtaps {
        params = params.with_num_taps(n);
    }
    if let Some(e) = args.numtaps_finder {
        params = params.with_estimator(e);
    }
    if let Some(f) = args.fixed_point_format {
        params = params.with_fixed_point_format(f);
    }

    let design = firxover::design(&params)?;
    info!(
        "designed {} crossover, lowpass {} taps, highpass {} taps",
        params.algorithm(),
        design.lowpass().len(),
        design.highpass().len()
    );

    let dir = args
        .output_path
        .or(config.output_path)
        .unwrap_or_else(|| PathBuf::from("."));
    let written = export::write_design(&design, &dir)
        .with_context(|| format!("failed to export taps to {}", dir.display()))?;
    for path in written {
        info!("wrote {}", path.display());
    }

    Ok(())
}
