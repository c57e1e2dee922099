pub mod config;
pub mod types;

pub use config::Config;
pub use types::{DecayMode, DetectorConfig, FeatureConfig, Tuning, FAIL_THRESHOLD};
