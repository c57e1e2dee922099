//! Record types produced by the access log parser.

use chrono::NaiveDateTime;

/// Status code literal for a successful login.
pub const STATUS_SUCCESS: &str = "200";
/// Status code literal for an authentication failure.
pub const STATUS_AUTH_FAILURE: &str = "401";

/// Closed classification of a status code, derived once at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    /// `200`
    Success,
    /// `401`
    AuthFailure,
    /// Any other status text.
    Other,
}

impl StatusClass {
    pub fn from_code(code: &str) -> Self {
        match code {
            STATUS_SUCCESS => StatusClass::Success,
            STATUS_AUTH_FAILURE => StatusClass::AuthFailure,
            _ => StatusClass::Other,
        }
    }
}

/// One parsed access log line.
///
/// Entries are immutable once parsed; every feature works from the same
/// shared slice of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// The original line, without its terminator.
    pub raw_line: String,
    /// Client identifier (IP address or hostname).
    pub host: String,
    /// Request instant with second resolution. The timezone offset is ignored.
    pub timestamp: NaiveDateTime,
    /// Full bracketed timestamp text including the timezone, e.g.
    /// `01/Jul/1995:00:00:01 -0400`.
    pub timestamp_text: String,
    /// Requested resource path.
    pub request: String,
    /// Status code kept verbatim.
    pub status_code: String,
    pub status: StatusClass,
    /// Bytes sent in the reply; `-` in the log is stored as 0.
    pub bytes_sent: u64,
}
