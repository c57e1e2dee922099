//! Access log line parser.
//!
//! Lines look like
//! `host - - [01/Jul/1995:00:00:01 -0400] "GET /history/apollo/ HTTP/1.0" 200 6245`.
//! The line is split on its first `[`: the host is the first token before it,
//! the timestamp runs up to the next `]`, and the status and byte count are the
//! last two tokens of the line. Whatever sits in between is the request.

use std::io::BufRead;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use log::debug;
use regex::Regex;

use crate::error_handling::types::ParseError;

use super::types::{LogEntry, StatusClass};

/// `strftime` layout of the timestamp token.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S";

static TAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<stamp>[^\]]*)\]\s*(?P<request>.*?)\s+(?P<status>\S+)\s+(?P<bytes>\S+)\s*$")
        .expect("access log tail pattern is valid")
});

/// Parses a single line. `line_number` is 1-based and only used for errors.
pub fn parse_line(line: &str, line_number: usize) -> Result<LogEntry, ParseError> {
    let raw_line = line.trim_end_matches(['\r', '\n']);

    let (head, tail) = raw_line
        .split_once('[')
        .ok_or(ParseError::MissingTimestamp(line_number))?;

    let host = head
        .split_whitespace()
        .next()
        .ok_or(ParseError::MissingHost(line_number))?;

    if !tail.contains(']') {
        return Err(ParseError::MissingTimestamp(line_number));
    }
    let caps = TAIL_PATTERN
        .captures(tail)
        .ok_or(ParseError::MissingFields(line_number))?;

    let timestamp_text = caps["stamp"].trim();
    let stamp = timestamp_text
        .split_whitespace()
        .next()
        .ok_or(ParseError::MissingTimestamp(line_number))?;
    let timestamp = parse_timestamp(stamp).ok_or_else(|| ParseError::BadTimestamp {
        line: line_number,
        value: stamp.to_string(),
    })?;

    let status_code = &caps["status"];
    let bytes_sent = parse_bytes(&caps["bytes"]).ok_or_else(|| ParseError::BadByteCount {
        line: line_number,
        value: caps["bytes"].to_string(),
    })?;

    Ok(LogEntry {
        raw_line: raw_line.to_string(),
        host: host.to_string(),
        timestamp,
        timestamp_text: timestamp_text.to_string(),
        request: resource_of(&caps["request"]),
        status_code: status_code.to_string(),
        status: StatusClass::from_code(status_code),
        bytes_sent,
    })
}

/// Parses every non-blank line of `reader`, stopping at the first malformed one.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<LogEntry>, ParseError> {
    let mut entries = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|_| ParseError::Unreadable(idx + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        entries.push(parse_line(&line, idx + 1)?);
    }
    debug!("Parsed {} record(s)", entries.len());
    Ok(entries)
}

pub fn parse_timestamp(stamp: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()
}

fn parse_bytes(field: &str) -> Option<u64> {
    if field == "-" {
        Some(0)
    } else {
        field.parse().ok()
    }
}

// `"GET /index.html HTTP/1.0"` -> `/index.html`
fn resource_of(request: &str) -> String {
    let mut tokens = request.split_whitespace();
    let first = tokens.next().unwrap_or("");
    let resource = tokens.next().unwrap_or(first);
    resource.trim_matches('"').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const LINE: &str =
        r#"199.72.81.55 - - [01/Jul/1995:00:00:01 -0400] "GET /history/apollo/ HTTP/1.0" 200 6245"#;

    #[test]
    fn parses_common_log_line() {
        let entry = parse_line(LINE, 1).unwrap();
        assert_eq!(entry.host, "199.72.81.55");
        assert_eq!(
            entry.timestamp,
            NaiveDate::from_ymd_opt(1995, 7, 1)
                .unwrap()
                .and_hms_opt(0, 0, 1)
                .unwrap()
        );
        assert_eq!(entry.timestamp_text, "01/Jul/1995:00:00:01 -0400");
        assert_eq!(entry.request, "/history/apollo/");
        assert_eq!(entry.status_code, "200");
        assert_eq!(entry.status, StatusClass::Success);
        assert_eq!(entry.bytes_sent, 6245);
        assert_eq!(entry.raw_line, LINE);
    }

    #[test]
    fn dash_byte_count_is_zero() {
        let line = r#"unicomp6.unicomp.net - - [01/Jul/1995:00:00:06 -0400] "POST /login HTTP/1.0" 401 -"#;
        let entry = parse_line(line, 3).unwrap();
        assert_eq!(entry.bytes_sent, 0);
        assert_eq!(entry.status, StatusClass::AuthFailure);
        assert_eq!(entry.request, "/login");
    }

    #[test]
    fn request_without_protocol_keeps_resource() {
        let line = r#"host1 - - [01/Jul/1995:00:00:06 -0400] "GET /shuttle/countdown/" 304 0"#;
        let entry = parse_line(line, 1).unwrap();
        assert_eq!(entry.request, "/shuttle/countdown/");
        assert_eq!(entry.status, StatusClass::Other);
    }

    #[test]
    fn brackets_inside_request_are_kept() {
        let line = r#"host1 - - [01/Jul/1995:00:00:06 -0400] "GET /a[1]/b] HTTP/1.0" 200 10"#;
        let entry = parse_line(line, 1).unwrap();
        assert_eq!(entry.timestamp_text, "01/Jul/1995:00:00:06 -0400");
        assert_eq!(entry.request, "/a[1]/b]");
        assert_eq!(entry.status, StatusClass::Success);
        assert_eq!(entry.bytes_sent, 10);
    }

    #[test]
    fn trailing_newline_is_not_part_of_raw_line() {
        let entry = parse_line(&format!("{}\r\n", LINE), 1).unwrap();
        assert_eq!(entry.raw_line, LINE);
    }

    #[test]
    fn rejects_missing_bracket() {
        assert_eq!(
            parse_line("host1 - - 01/Jul/1995 \"GET /\" 200 1", 7),
            Err(ParseError::MissingTimestamp(7))
        );
    }

    #[test]
    fn rejects_bad_timestamp() {
        let line = r#"host1 - - [31/Foo/1995:00:00:06 -0400] "GET /" 200 1"#;
        match parse_line(line, 2) {
            Err(ParseError::BadTimestamp { line, value }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "31/Foo/1995:00:00:06");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_byte_count() {
        let line = r#"host1 - - [01/Jul/1995:00:00:06 -0400] "GET /" 200 lots"#;
        assert!(matches!(
            parse_line(line, 4),
            Err(ParseError::BadByteCount { line: 4, .. })
        ));
    }

    #[test]
    fn rejects_missing_host() {
        let line = r#"[01/Jul/1995:00:00:06 -0400] "GET /" 200 1"#;
        assert_eq!(parse_line(line, 5), Err(ParseError::MissingHost(5)));
    }

    #[test]
    fn reader_skips_blank_lines_and_reports_line_numbers() {
        let input = format!("{}\n\n{}\nbroken line\n", LINE, LINE);
        let err = parse_reader(input.as_bytes()).unwrap_err();
        assert_eq!(err.line(), 4);

        let ok = parse_reader(format!("{}\n\n{}\n", LINE, LINE).as_bytes()).unwrap();
        assert_eq!(ok.len(), 2);
    }
}
