use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::configuration::FAIL_THRESHOLD;
use crate::log_parsing::{LogEntry, StatusClass};

use super::session::HostSession;

/// Groups the records of every host with at least [`FAIL_THRESHOLD`]
/// authentication failures into time-ordered sessions.
///
/// Hosts below the threshold are dropped entirely. The returned map iterates
/// in ascending host order.
pub fn build_sessions(entries: &[LogEntry]) -> BTreeMap<&str, HostSession<'_>> {
    let mut failures: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        if entry.status == StatusClass::AuthFailure {
            *failures.entry(entry.host.as_str()).or_default() += 1;
        }
    }

    let mut grouped: BTreeMap<&str, Vec<&LogEntry>> = BTreeMap::new();
    for entry in entries {
        let host = entry.host.as_str();
        if failures.get(host).copied().unwrap_or(0) >= FAIL_THRESHOLD {
            grouped.entry(host).or_default().push(entry);
        }
    }
    debug!(
        "{} host(s) with failures, {} eligible for lockout analysis",
        failures.len(),
        grouped.len()
    );

    grouped
        .into_iter()
        .filter_map(|(host, records)| HostSession::new(records).map(|s| (host, s)))
        .collect()
}
