use serde::Serialize;
use thiserror::Error;

/// Why a line could not become an entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Line too large: {0} bytes (max: {1} bytes)")]
    LineTooLarge(usize, usize),

    #[error("Non-UTF8 content")]
    NonUtf8,

    #[error("Expected 5 tab-separated fields, found {0}")]
    FieldCount(usize),

    #[error("Invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Invalid event: {0:?}")]
    InvalidEvent(String),

    #[error("Invalid task number: {0:?}")]
    InvalidTaskNumber(String),

    #[error("Invalid status: {0:?}")]
    InvalidStatus(String),
}

impl ParseError {
    pub fn reason(&self) -> SkipReason {
        match self {
            ParseError::LineTooLarge(..) => SkipReason::TooLarge,
            ParseError::NonUtf8 => SkipReason::NonUtf8,
            ParseError::FieldCount(_) => SkipReason::FieldCount,
            ParseError::InvalidTimestamp { .. } => SkipReason::Timestamp,
            ParseError::InvalidEvent(_) => SkipReason::Event,
            ParseError::InvalidTaskNumber(_) => SkipReason::TaskNumber,
            ParseError::InvalidStatus(_) => SkipReason::Status,
        }
    }
}

/// Failure categories used for skip accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    TooLarge,
    NonUtf8,
    FieldCount,
    Timestamp,
    Event,
    TaskNumber,
    Status,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::TooLarge => "too_large",
            SkipReason::NonUtf8 => "non_utf8",
            SkipReason::FieldCount => "field_count",
            SkipReason::Timestamp => "timestamp",
            SkipReason::Event => "event",
            SkipReason::TaskNumber => "task_number",
            SkipReason::Status => "status",
        }
    }
}

/// A dropped line, kept only when strict diagnostics are enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub line: usize,
    #[serde(serialize_with = "serialize_error")]
    pub error: ParseError,
}

fn serialize_error<S: serde::Serializer>(error: &ParseError, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&error.to_string())
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.error)
    }
}
