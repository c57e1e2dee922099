//! Host session building.
//!
//! Selects the hosts that collected enough authentication failures to be worth
//! running through the lockout detector, and orders each host's records in
//! time.

/// Per-host ordered record sequence.
pub mod session;
/// Eligibility filter and partitioning.
pub mod session_builder;

pub use session::HostSession;
pub use session_builder::build_sessions;
