//! Error types shared across the crate.
//!
//! Each stage of the pipeline owns one enum; `ControllerError` wraps them all
//! for the binary.

pub mod types;
