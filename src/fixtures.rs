//! Log line builders shared by unit tests.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::log_parsing::{parse_line, LogEntry};

/// 01/Jul/1995:00:00:00, the instant offsets are measured from.
pub fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1995, 7, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn at(offset_secs: i64) -> NaiveDateTime {
    epoch() + TimeDelta::seconds(offset_secs)
}

pub fn line(host: &str, offset_secs: i64, resource: &str, status: &str, bytes: &str) -> String {
    format!(
        r#"{} - - [{} -0400] "GET {} HTTP/1.0" {} {}"#,
        host,
        at(offset_secs).format("%d/%b/%Y:%H:%M:%S"),
        resource,
        status,
        bytes
    )
}

pub fn entry(host: &str, offset_secs: i64, status: &str) -> LogEntry {
    parse_line(&line(host, offset_secs, "/login", status, "100"), 1).unwrap()
}

pub fn entry_with(host: &str, offset_secs: i64, resource: &str, bytes: &str) -> LogEntry {
    parse_line(&line(host, offset_secs, resource, "200", bytes), 1).unwrap()
}
