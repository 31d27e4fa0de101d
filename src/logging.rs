//! Logging setup of the command line tool.
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable with additional filter directives.
pub const LOG_ENV: &str = "FIRXOVER_LOG";

/// Installs a compact stderr subscriber.
///
/// Directives in `FIRXOVER_LOG` are combined with `level`.
pub fn init(level: LevelFilter) {
    let format = fmt::layer()
        .with_level(true)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact();

    let filter = EnvFilter::from_env(LOG_ENV).add_directive(level.into());

    if tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .try_init()
        .is_err()
    {
        debug!("logger already initialized");
    }
}
