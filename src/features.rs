//! The four mined features.
//!
//! Every feature reads the same parsed record slice independently and renders
//! its result as text rows ready to be written to its artifact.

pub mod busiest_windows;
pub mod top_hosts;
pub mod top_resources;

use std::fmt;

use crate::configuration::Tuning;
use crate::error_handling::types::AnalysisError;
use crate::lockout_detection::LockoutDetector;
use crate::log_parsing::LogEntry;
use crate::session_management::build_sessions;

pub use busiest_windows::{busiest_windows, BusyWindow};
pub use top_hosts::{top_hosts, HostCount};
pub use top_resources::{top_resources, ResourceUsage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Most frequent visiting hosts.
    TopHosts,
    /// Busiest windows.
    BusiestWindows,
    /// Resources consuming the most bandwidth.
    TopResources,
    /// Lines logged while a host was locked out.
    BlockedHosts,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::TopHosts,
        Feature::BusiestWindows,
        Feature::TopResources,
        Feature::BlockedHosts,
    ];

    /// Computes this feature's artifact rows.
    pub fn rows(&self, entries: &[LogEntry], tuning: &Tuning) -> Result<Vec<String>, AnalysisError> {
        let top_n = tuning.features.top_n;
        let rows = match self {
            Feature::TopHosts => top_hosts(entries, top_n)
                .iter()
                .map(HostCount::to_row)
                .collect(),
            Feature::BusiestWindows => busiest_windows(entries, tuning.features.busy_window(), top_n)
                .iter()
                .map(BusyWindow::to_row)
                .collect(),
            Feature::TopResources => top_resources(entries, top_n)
                .into_iter()
                .map(|r| r.resource)
                .collect(),
            Feature::BlockedHosts => blocked_rows(entries, tuning)?,
        };
        Ok(rows)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::TopHosts => write!(f, "top hosts"),
            Feature::BusiestWindows => write!(f, "busiest windows"),
            Feature::TopResources => write!(f, "top resources"),
            Feature::BlockedHosts => write!(f, "blocked hosts"),
        }
    }
}

fn blocked_rows(entries: &[LogEntry], tuning: &Tuning) -> Result<Vec<String>, AnalysisError> {
    let sessions = build_sessions(entries);
    let detector = LockoutDetector::new(tuning.detector.clone());
    Ok(detector
        .blocked_lines_all(&sessions)?
        .into_iter()
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{entry, entry_with};

    #[test]
    fn every_feature_renders_rows() {
        let mut entries = vec![
            entry("x.org", 0, "401"),
            entry("x.org", 1, "401"),
            entry("x.org", 2, "401"),
            entry("x.org", 3, "200"),
        ];
        entries.push(entry_with("y.org", 4, "/video.mpg", "9000"));
        let tuning = Tuning::default();

        assert_eq!(
            Feature::TopHosts.rows(&entries, &tuning).unwrap(),
            vec!["x.org,4", "y.org,1"]
        );
        assert_eq!(
            Feature::TopResources.rows(&entries, &tuning).unwrap(),
            vec!["/video.mpg", "/login"]
        );
        assert_eq!(
            Feature::BusiestWindows.rows(&entries, &tuning).unwrap()[0],
            "01/Jul/1995:00:00:00 -0400,5"
        );
        assert_eq!(
            Feature::BlockedHosts.rows(&entries, &tuning).unwrap(),
            vec![entries[3].raw_line.clone()]
        );
    }

    #[test]
    fn largest_accepted_busy_window_does_not_overflow() {
        let mut tuning = Tuning::default();
        tuning.features.busy_window_secs = 9_000_000_000_000_000;
        assert!(tuning.validate().is_ok());

        let entries = vec![entry("x.org", 0, "200"), entry("y.org", 60, "200")];
        assert_eq!(
            Feature::BusiestWindows.rows(&entries, &tuning).unwrap(),
            vec!["01/Jul/1995:00:00:00 -0400,2", "01/Jul/1995:00:01:00 -0400,1"]
        );
    }

    #[test]
    fn no_qualifying_hosts_is_empty_not_an_error() {
        let entries = vec![entry("x.org", 0, "401"), entry("x.org", 1, "200")];
        assert!(Feature::BlockedHosts
            .rows(&entries, &Tuning::default())
            .unwrap()
            .is_empty());
    }
}
