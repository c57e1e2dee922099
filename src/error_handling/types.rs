use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ArgumentError(String),
    TomlError(String),
    NotInRange(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ArgumentError(e) => write!(f, "Argument error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            ConfigError::NotInRange(e) => write!(f, "Value out of range: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

/// A malformed access log line. Every variant carries the 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MissingTimestamp(usize),
    MissingHost(usize),
    BadTimestamp { line: usize, value: String },
    MissingFields(usize),
    BadByteCount { line: usize, value: String },
    Unreadable(usize),
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingTimestamp(line)
            | ParseError::MissingHost(line)
            | ParseError::MissingFields(line)
            | ParseError::Unreadable(line) => *line,
            ParseError::BadTimestamp { line, .. } | ParseError::BadByteCount { line, .. } => *line,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingTimestamp(l) => write!(f, "line {}: no bracketed timestamp", l),
            ParseError::MissingHost(l) => write!(f, "line {}: no host before timestamp", l),
            ParseError::BadTimestamp { line, value } => {
                write!(f, "line {}: unparsable timestamp '{}'", line, value)
            }
            ParseError::MissingFields(l) => {
                write!(f, "line {}: expected request, status and byte count", l)
            }
            ParseError::BadByteCount { line, value } => {
                write!(f, "line {}: invalid byte count '{}'", line, value)
            }
            ParseError::Unreadable(l) => write!(f, "line {}: unreadable or not UTF-8", l),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    NonMonotonicTimestamp { host: String },
    HostMismatch { expected: String, found: String },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::NonMonotonicTimestamp { host } => {
                write!(f, "Timestamps for host {} are not in ascending order", host)
            }
            AnalysisError::HostMismatch { expected, found } => {
                write!(f, "Session for host {} contains a record from {}", expected, found)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

#[derive(Debug)]
pub enum StorageError {
    ReadFailed(PathBuf, std::io::Error),
    WriteFailed(PathBuf, std::io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed(p, e) => write!(f, "Storage read failed {}: {}", p.display(), e),
            StorageError::WriteFailed(p, e) => {
                write!(f, "Storage write failed {}: {}", p.display(), e)
            }
        }
    }
}

impl std::error::Error for StorageError {}

#[derive(Debug)]
pub enum ControllerError {
    ConfigurationError(ConfigError),
    ParseError(ParseError),
    AnalysisError(AnalysisError),
    StorageError(StorageError),
    TaskFailed(String),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::ConfigurationError(e) => write!(f, "Configuration error: {}", e),
            ControllerError::ParseError(e) => write!(f, "Parse error: {}", e),
            ControllerError::AnalysisError(e) => write!(f, "Analysis error: {}", e),
            ControllerError::StorageError(e) => write!(f, "Storage error: {}", e),
            ControllerError::TaskFailed(e) => write!(f, "Feature task failed: {}", e),
        }
    }
}

impl std::error::Error for ControllerError {}

impl From<ConfigError> for ControllerError {
    fn from(err: ConfigError) -> Self {
        ControllerError::ConfigurationError(err)
    }
}

impl From<ParseError> for ControllerError {
    fn from(err: ParseError) -> Self {
        ControllerError::ParseError(err)
    }
}

impl From<AnalysisError> for ControllerError {
    fn from(err: AnalysisError) -> Self {
        ControllerError::AnalysisError(err)
    }
}

impl From<StorageError> for ControllerError {
    fn from(err: StorageError) -> Self {
        ControllerError::StorageError(err)
    }
}
