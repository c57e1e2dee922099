use std::collections::BTreeMap;

use log::debug;

use crate::configuration::DetectorConfig;
use crate::error_handling::types::AnalysisError;
use crate::log_parsing::LogEntry;
use crate::session_management::HostSession;

use super::state::{LockoutState, Transition};

/// Runs the lockout state machine over host sessions.
///
/// Each session gets its own [`LockoutState`]; nothing is shared between
/// hosts, so sessions can be scanned in any order and their results simply
/// concatenated.
#[derive(Debug, Clone, Default)]
pub struct LockoutDetector {
    config: DetectorConfig,
}

impl LockoutDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Raw lines of `session` that arrived while its host was blocked.
    pub fn blocked_lines<'a>(
        &self,
        session: &HostSession<'a>,
    ) -> Result<Vec<&'a str>, AnalysisError> {
        self.scan(session.host(), session.entries())
    }

    /// Scans records that are expected to belong to `host` and to be in
    /// ascending time order. Either violation aborts the scan.
    pub fn scan<'a>(
        &self,
        host: &str,
        entries: &[&'a LogEntry],
    ) -> Result<Vec<&'a str>, AnalysisError> {
        let mut state = LockoutState::new();
        let mut captured = Vec::new();
        let mut blocks = 0usize;
        let mut last_seen = None;

        for entry in entries {
            if entry.host != host {
                return Err(AnalysisError::HostMismatch {
                    expected: host.to_string(),
                    found: entry.host.clone(),
                });
            }
            if last_seen.is_some_and(|prev| entry.timestamp < prev) {
                return Err(AnalysisError::NonMonotonicTimestamp {
                    host: host.to_string(),
                });
            }
            last_seen = Some(entry.timestamp);

            match state.observe(entry.timestamp, entry.status, &self.config) {
                Transition::Captured => captured.push(entry.raw_line.as_str()),
                Transition::BlockStarted => blocks += 1,
                _ => {}
            }
        }

        if blocks > 0 {
            debug!(
                "[{}] {} block(s), {} line(s) captured",
                host,
                blocks,
                captured.len()
            );
        }
        Ok(captured)
    }

    /// Blocked lines of every session, host-ascending then chronological.
    pub fn blocked_lines_all<'a>(
        &self,
        sessions: &BTreeMap<&'a str, HostSession<'a>>,
    ) -> Result<Vec<&'a str>, AnalysisError> {
        let mut lines = Vec::new();
        for session in sessions.values() {
            lines.extend(self.blocked_lines(session)?);
        }
        Ok(lines)
    }
}
