//! Access log parsing.
//!
//! Turns raw lines into [`LogEntry`] values. Parsing is all-or-nothing: the
//! first malformed line aborts the run, since every feature shares the same
//! parsed dataset.

pub mod parser;
pub mod types;

pub use parser::{parse_line, parse_reader};
pub use types::{LogEntry, StatusClass};
