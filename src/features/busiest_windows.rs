//! Busiest time windows.
//!
//! Every distinct timestamp seen in the log anchors a candidate window of
//! fixed length. Counting works on the sorted list of record instants with
//! binary search, so memory stays proportional to the number of records no
//! matter how far apart they are in time.

use std::collections::HashMap;

use chrono::{NaiveDateTime, TimeDelta};

use crate::log_parsing::LogEntry;

/// Request count for the window starting at `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusyWindow {
    /// Timestamp text as it appeared in the log.
    pub start_text: String,
    pub start: NaiveDateTime,
    /// Records in `[start, start + window)`.
    pub count: usize,
}

impl BusyWindow {
    /// `timestamp,count`
    pub fn to_row(&self) -> String {
        format!("{},{}", self.start_text, self.count)
    }
}

/// The `top_n` busiest windows of length `window`, by count descending, then
/// by timestamp text.
pub fn busiest_windows(entries: &[LogEntry], window: TimeDelta, top_n: usize) -> Vec<BusyWindow> {
    let mut instants: Vec<NaiveDateTime> = entries.iter().map(|e| e.timestamp).collect();
    instants.sort_unstable();

    let mut anchors: HashMap<&str, NaiveDateTime> = HashMap::new();
    for entry in entries {
        anchors
            .entry(entry.timestamp_text.as_str())
            .or_insert(entry.timestamp);
    }

    let mut windows: Vec<BusyWindow> = anchors
        .into_iter()
        .map(|(text, start)| BusyWindow {
            start_text: text.to_string(),
            start,
            count: count_in(&instants, start, start.checked_add_signed(window)),
        })
        .collect();

    windows.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.start_text.cmp(&b.start_text))
    });
    windows.truncate(top_n);
    windows
}

// Number of sorted instants in [from, until). A window reaching past the last
// representable date has no upper bound.
fn count_in(sorted: &[NaiveDateTime], from: NaiveDateTime, until: Option<NaiveDateTime>) -> usize {
    let lo = sorted.partition_point(|t| *t < from);
    let hi = match until {
        Some(until) => sorted.partition_point(|t| *t < until),
        None => sorted.len(),
    };
    hi - lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::entry;

    const HOUR: i64 = 3600;

    fn rows(entries: &[LogEntry], top_n: usize) -> Vec<String> {
        busiest_windows(entries, TimeDelta::seconds(HOUR), top_n)
            .iter()
            .map(BusyWindow::to_row)
            .collect()
    }

    #[test]
    fn window_is_half_open() {
        let entries = vec![
            entry("a", 0, "200"),
            entry("b", 0, "200"),
            entry("c", HOUR - 1, "200"),
            entry("d", HOUR, "200"),
        ];
        let top = busiest_windows(&entries, TimeDelta::seconds(HOUR), 10);
        assert_eq!(top[0].start_text, "01/Jul/1995:00:00:00 -0400");
        assert_eq!(top[0].count, 3);
        assert_eq!(top[1].count, 2);
        assert_eq!(top[2].count, 1);
    }

    #[test]
    fn ties_follow_timestamp_text() {
        let entries = vec![
            entry("a", 7200, "200"),
            entry("b", 0, "200"),
            entry("c", 14400, "200"),
        ];
        assert_eq!(
            rows(&entries, 10),
            vec![
                "01/Jul/1995:00:00:00 -0400,1",
                "01/Jul/1995:02:00:00 -0400,1",
                "01/Jul/1995:04:00:00 -0400,1",
            ]
        );
    }

    #[test]
    fn ties_across_months_sort_by_text_not_instant() {
        let day = 24 * HOUR;
        let entries = vec![entry("a", day, "200"), entry("b", 31 * day, "200")];
        assert_eq!(
            rows(&entries, 10),
            vec!["01/Aug/1995:00:00:00 -0400,1", "02/Jul/1995:00:00:00 -0400,1"]
        );
    }

    #[test]
    fn window_past_last_representable_date_is_open_ended() {
        let entries = vec![
            entry("a", 0, "200"),
            entry("b", 5, "200"),
            entry("c", 10 * HOUR, "200"),
        ];
        let top = busiest_windows(&entries, TimeDelta::seconds(9_000_000_000_000_000), 10);
        assert_eq!(top[0].count, 3);
        assert_eq!(top[1].count, 2);
        assert_eq!(top[2].count, 1);
    }

    #[test]
    fn distant_records_do_not_allocate_the_gap() {
        // Ten years apart; a dense per-second array would need ~300M slots.
        let entries = vec![
            entry("a", 0, "200"),
            entry("a", 10 * 365 * 24 * HOUR, "200"),
            entry("a", 10 * 365 * 24 * HOUR + 1, "200"),
        ];
        let top = busiest_windows(&entries, TimeDelta::seconds(HOUR), 10);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].count, 2);
    }

    #[test]
    fn keeps_top_n() {
        let entries: Vec<_> = (0..30).map(|t| entry("a", t * 10, "200")).collect();
        let top = busiest_windows(&entries, TimeDelta::seconds(HOUR), 10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].count, 30);
        assert_eq!(top[9].count, 21);
    }

    #[test]
    fn empty_input() {
        assert!(rows(&[], 10).is_empty());
    }
}
