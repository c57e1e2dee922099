use super::types::*;
use crate::error_handling::types::ConfigError;
use clap::Parser;
use log::info;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Runtime configuration for one mining run.
///
/// The five positional paths mirror the historical command line of the batch
/// job: the input log first, then the four artifacts in the order hosts,
/// hours, resources, blocked. Detector and feature tuning comes from an
/// optional TOML file given with `--config` or the `LOGMINE_CONFIG`
/// environment variable.
///
/// # Examples
///
/// ```no_run
/// use logmine::configuration::config::Config;
///
/// let config = Config::from_args().unwrap();
/// println!("Reading: {}", config.input.display());
/// ```
#[derive(Parser, Debug, Clone)]
#[command(name = "logmine")]
#[command(version)]
#[command(about = "Mines an access log for top hosts, resources, busy hours and blocked hosts")]
pub struct Config {
    /// Access log to analyse
    pub input: PathBuf,

    /// Output for the most active hosts (`host,count`)
    pub hosts_output: PathBuf,

    /// Output for the busiest 60-minute windows (`timestamp,count`)
    pub hours_output: PathBuf,

    /// Output for the most bandwidth-intensive resources
    pub resources_output: PathBuf,

    /// Output for the log lines captured while a host was blocked
    pub blocked_output: PathBuf,

    /// TOML file overriding detector and feature parameters
    ///
    /// # Command Line
    /// Use `--config <FILE>` or set `LOGMINE_CONFIG`
    #[arg(long = "config", env = "LOGMINE_CONFIG")]
    pub config_file: Option<PathBuf>,

    /// Detector and feature parameters.
    ///
    /// Uses `#[arg(skip)]`; filled from `config_file` after argument parsing.
    #[arg(skip)]
    pub tuning: Tuning,
}

impl Config {
    /// Parses the process arguments and loads the tuning file if one is named.
    ///
    /// Invalid arguments print clap's usage message and exit the process.
    pub fn from_args() -> Result<Self, ConfigError> {
        Config::parse().with_tuning()
    }

    /// Same as [`Config::from_args`] over an explicit argument list; the first
    /// item is the program name.
    pub fn try_from_iter<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Config::try_parse_from(args)
            .map_err(|e| ConfigError::ArgumentError(e.to_string()))?
            .with_tuning()
    }

    fn with_tuning(mut self) -> Result<Self, ConfigError> {
        if let Some(path) = &self.config_file {
            self.tuning = load_tuning(path)?;
            info!("Tuning loaded from {}", path.display());
        }
        self.tuning.validate()?;
        Ok(self)
    }

    pub fn detector(&self) -> &DetectorConfig {
        &self.tuning.detector
    }

    pub fn features(&self) -> &FeatureConfig {
        &self.tuning.features
    }
}

/// Reads and validates a tuning file.
pub fn load_tuning(path: &Path) -> Result<Tuning, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let tuning: Tuning =
        toml::from_str(&content).map_err(|e| ConfigError::TomlError(e.to_string()))?;
    tuning.validate()?;
    Ok(tuning)
}
