use std::collections::HashMap;

use crate::log_parsing::LogEntry;

/// Access count of one host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCount {
    pub host: String,
    pub count: usize,
}

impl HostCount {
    /// `host,count`
    pub fn to_row(&self) -> String {
        format!("{},{}", self.host, self.count)
    }
}

/// The `top_n` most frequent hosts, by count descending then host ascending.
pub fn top_hosts(entries: &[LogEntry], top_n: usize) -> Vec<HostCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.host.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(top_n)
        .map(|(host, count)| HostCount {
            host: host.to_string(),
            count,
        })
        .collect()
}
