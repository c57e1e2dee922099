//! Brute-force lockout detection.
//!
//! A host that logs three authentication failures (`401`) within a short
//! window is blocked for a fixed period. Every record the host produces while
//! the block is active is captured. The remaining block time decays as the
//! host's records advance in time; how elapsed time is measured is chosen by
//! [`DecayMode`](crate::configuration::DecayMode).
//!
//! ```text
//!            401            401 (< window)        401 (< window)
//!  [idle] ───────▶ [one] ──────────────▶ [two] ──────────────▶ [blocked]
//!    ▲               │  401 (>= window)    │ 401 (>= window)       │
//!    │               └──── slide ◀─────────┘                       │
//!    └──────────── 200 clears / block decays to zero ◀─────────────┘
//! ```

pub mod detector;
pub mod state;

pub use detector::LockoutDetector;
pub use state::{LockoutState, Transition};
