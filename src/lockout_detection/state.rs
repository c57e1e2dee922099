//! Per-host lockout state machine.

use chrono::{NaiveDateTime, TimeDelta};

use crate::configuration::{DecayMode, DetectorConfig};
use crate::log_parsing::StatusClass;

/// What a single record did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The record arrived while a block was active and is captured.
    Captured,
    /// A success outside a block cleared pending failures.
    FailuresCleared,
    /// Neither success nor authentication failure.
    Ignored,
    /// Opened a new failure window.
    FirstFailure,
    /// Second failure inside the window.
    SecondFailure,
    /// A failure arrived after the window expired and restarted it.
    WindowSlid,
    /// Third failure inside the window; the host is now blocked.
    BlockStarted,
}

/// Mutable lockout bookkeeping for one host.
///
/// Created fresh for every host and dropped when its session ends. The
/// remaining block time is only raised by [`Transition::BlockStarted`], and
/// otherwise decays towards zero as records arrive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockoutState {
    first_fail_at: Option<NaiveDateTime>,
    second_fail_at: Option<NaiveDateTime>,
    block_remaining: TimeDelta,
    /// Instant the next elapsed time is measured from.
    reference: Option<NaiveDateTime>,
}

impl Default for LockoutState {
    fn default() -> Self {
        Self {
            first_fail_at: None,
            second_fail_at: None,
            block_remaining: TimeDelta::zero(),
            reference: None,
        }
    }
}

impl LockoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_fail_at(&self) -> Option<NaiveDateTime> {
        self.first_fail_at
    }

    pub fn second_fail_at(&self) -> Option<NaiveDateTime> {
        self.second_fail_at
    }

    pub fn block_remaining(&self) -> TimeDelta {
        self.block_remaining
    }

    pub fn is_blocked(&self) -> bool {
        self.block_remaining > TimeDelta::zero()
    }

    /// Feeds one record observed at `now`. Records must arrive in
    /// non-decreasing time order; that is checked by the caller.
    pub fn observe(
        &mut self,
        now: NaiveDateTime,
        status: StatusClass,
        config: &DetectorConfig,
    ) -> Transition {
        let reference = *self.reference.get_or_insert(now);
        let elapsed = now - reference;
        self.block_remaining = (self.block_remaining - elapsed).max(TimeDelta::zero());
        if config.decay_mode == DecayMode::PreviousRecord {
            self.reference = Some(now);
        }

        if self.is_blocked() {
            return Transition::Captured;
        }

        match status {
            StatusClass::Success => {
                self.clear_failures();
                Transition::FailuresCleared
            }
            StatusClass::Other => Transition::Ignored,
            StatusClass::AuthFailure => self.record_failure(now, config),
        }
    }

    fn record_failure(&mut self, now: NaiveDateTime, config: &DetectorConfig) -> Transition {
        let Some(first) = self.first_fail_at else {
            self.first_fail_at = Some(now);
            return Transition::FirstFailure;
        };

        let in_window = now - first < config.fail_window();
        match (self.second_fail_at, in_window) {
            (None, true) => {
                self.second_fail_at = Some(now);
                Transition::SecondFailure
            }
            (Some(_), true) => {
                self.block_remaining = config.block_duration();
                // The batch job only reset the first slot, so two fresh
                // failures after a block were enough to block again.
                match config.decay_mode {
                    DecayMode::PreviousRecord => self.clear_failures(),
                    DecayMode::SessionStart => self.first_fail_at = None,
                }
                Transition::BlockStarted
            }
            (_, false) => {
                self.first_fail_at = Some(now);
                self.second_fail_at = None;
                Transition::WindowSlid
            }
        }
    }

    fn clear_failures(&mut self) {
        self.first_fail_at = None;
        self.second_fail_at = None;
    }
}
