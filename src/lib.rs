pub mod configuration;
pub mod controller;
pub mod error_handling;
pub mod features;
pub mod lockout_detection;
pub mod log_parsing;
pub mod session_management;
pub mod storage;

#[cfg(test)]
pub(crate) mod fixtures;

pub use controller::Controller;
