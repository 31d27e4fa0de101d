//! Configuration Management
//!
//! Settings are read, in order of increasing priority, from the user config file
//! (`<config dir>/firxover/config.toml`), `config.toml` in the working directory, and
//! `FIRXOVER_*` environment variables.
use config::ConfigBuilder;
use config::File;
use config::FileFormat;
use config::Source;
use config::Value;
use config::builder::DefaultState;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

use crate::FirAlgorithm;

/// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LevelFilter,
    /// Default output directory for exported taps
    pub output_path: Option<PathBuf>,
    /// Default FIR design method
    pub fir_algorithm: FirAlgorithm,
}

impl Config {
    /// Reads the configuration from all sources.
    ///
    /// Missing files are skipped. Errors and invalid values are logged and fall back to the
    /// defaults.
    pub fn load() -> Config {
        let mut settings = ::config::Config::builder();

        // user config
        if let Some(mut path) = dirs::config_dir() {
            path.push("firxover");
            path.push("config.toml");

            settings = settings.add_source(File::from(path).required(false));
        }

        // project config
        settings = settings.add_source(File::new("config.toml", FileFormat::Toml).required(false));

        // env config
        settings = settings.add_source(config::Environment::with_prefix("firxover"));

        Self::build(settings)
    }

    fn build(settings: ConfigBuilder<DefaultState>) -> Config {
        let mut c = Config::default();

        match settings.build() {
            Ok(settings) => match settings.collect() {
                Ok(config) => {
                    for (k, v) in config {
                        c.set_value(k, v);
                    }
                }
                Err(e) => warn!("error parsing config {e:?}"),
            },
            Err(e) => warn!("error reading config {e:?}"),
        }
        c
    }

    /// Sets a config value. Unknown keys are ignored.
    pub fn set_value<V: Into<Value>>(&mut self, name: impl Into<String>, value: V) {
        let name = name.into();
        let value = value.into();

        match name.as_str() {
            "log_level" => {
                if let Some(l) = config_parse::<LevelFilter>(&name, &value) {
                    self.log_level = l;
                }
            }
            "output_path" => {
                if let Some(p) = config_parse::<PathBuf>(&name, &value) {
                    self.output_path = Some(p);
                }
            }
            "fir_algorithm" => {
                if let Some(a) = config_parse::<FirAlgorithm>(&name, &value) {
                    self.fir_algorithm = a;
                }
            }
            // FIRXOVER_LOG is read by the log filter, not here
            _ => debug!("ignoring unknown config key {name}"),
        }
    }
}

impl Default for Config {
    #[cfg(debug_assertions)]
    fn default() -> Self {
        Config {
            log_level: LevelFilter::DEBUG,
            output_path: None,
            fir_algorithm: FirAlgorithm::LeastSquares,
        }
    }

    #[cfg(not(debug_assertions))]
    fn default() -> Self {
        Config {
            log_level: LevelFilter::INFO,
            output_path: None,
            fir_algorithm: FirAlgorithm::LeastSquares,
        }
    }
}

fn config_parse<T: FromStr>(name: &str, v: &Value) -> Option<T> {
    let parsed = v
        .clone()
        .into_string()
        .ok()
        .and_then(|s| s.parse::<T>().ok());
    if parsed.is_none() {
        warn!("invalid config value {v} for {name}, keeping default");
    }
    parsed
}
