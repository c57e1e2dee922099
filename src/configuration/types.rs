use chrono::TimeDelta;
use serde::Deserialize;

use crate::error_handling::types::ConfigError;

/// Number of authentication failures inside the window that triggers a block.
///
/// The detector tracks the first two failures in dedicated slots, so this is a
/// crate constant rather than a tunable. The session builder uses the same
/// value as its eligibility threshold.
pub const FAIL_THRESHOLD: usize = 3;

/// Reference instant the remaining block time decays from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecayMode {
    /// Elapsed time is measured from the immediately preceding record.
    #[default]
    PreviousRecord,
    /// Elapsed time is always measured from the first record of the session,
    /// and a block only resets the first failure slot. Reproduces the output
    /// of the batch job this tool replaces.
    SessionStart,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub fail_window_secs: u64,
    pub block_duration_secs: u64,
    pub decay_mode: DecayMode,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            fail_window_secs: 20,
            block_duration_secs: 300,
            decay_mode: DecayMode::default(),
        }
    }
}

impl DetectorConfig {
    pub fn fail_window(&self) -> TimeDelta {
        TimeDelta::seconds(self.fail_window_secs as i64)
    }

    pub fn block_duration(&self) -> TimeDelta {
        TimeDelta::seconds(self.block_duration_secs as i64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Rows kept by each ranked feature.
    pub top_n: usize,
    /// Length of the busiest-window span.
    pub busy_window_secs: u64,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            busy_window_secs: 3600,
        }
    }
}

impl FeatureConfig {
    pub fn busy_window(&self) -> TimeDelta {
        TimeDelta::seconds(self.busy_window_secs as i64)
    }
}

/// Optional TOML tuning file contents.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub detector: DetectorConfig,
    pub features: FeatureConfig,
}

// Durations go through chrono as i64 seconds.
const MAX_SECS: u64 = i64::MAX as u64 / 1000;

impl Tuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_secs("detector.fail_window_secs", self.detector.fail_window_secs)?;
        check_secs("detector.block_duration_secs", self.detector.block_duration_secs)?;
        check_secs("features.busy_window_secs", self.features.busy_window_secs)?;
        if self.features.top_n == 0 {
            return Err(ConfigError::NotInRange(
                "features.top_n must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_secs(key: &str, value: u64) -> Result<(), ConfigError> {
    if value == 0 || value > MAX_SECS {
        return Err(ConfigError::NotInRange(format!(
            "{} must be between 1 and {}, got {}",
            key, MAX_SECS, value
        )));
    }
    Ok(())
}
