use std::collections::HashMap;

use crate::log_parsing::LogEntry;

/// Total bytes served for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceUsage {
    pub resource: String,
    pub bytes: u64,
}

/// The `top_n` resources by total bytes sent, descending, ties broken by
/// resource ascending.
pub fn top_resources(entries: &[LogEntry], top_n: usize) -> Vec<ResourceUsage> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for entry in entries {
        let total = totals.entry(entry.request.as_str()).or_default();
        *total = total.saturating_add(entry.bytes_sent);
    }

    let mut ranked: Vec<(&str, u64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(top_n)
        .map(|(resource, bytes)| ResourceUsage {
            resource: resource.to_string(),
            bytes,
        })
        .collect()
}
