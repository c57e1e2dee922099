use crate::log_parsing::LogEntry;

/// All records of one host, in ascending timestamp order.
///
/// Records sharing a timestamp keep their original stream order. A session is
/// never empty and every record carries the session's host.
#[derive(Debug, Clone)]
pub struct HostSession<'a> {
    host: &'a str,
    entries: Vec<&'a LogEntry>,
}

impl<'a> HostSession<'a> {
    /// Builds a session from one host's records, stable-sorting them by time.
    ///
    /// Returns `None` if `entries` is empty or mixes hosts.
    pub fn new(mut entries: Vec<&'a LogEntry>) -> Option<Self> {
        let first: &'a LogEntry = *entries.first()?;
        let host = first.host.as_str();
        if entries.iter().any(|e| e.host != host) {
            return None;
        }
        entries.sort_by_key(|e| e.timestamp);
        Some(Self { host, entries })
    }

    pub fn host(&self) -> &'a str {
        self.host
    }

    pub fn entries(&self) -> &[&'a LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
