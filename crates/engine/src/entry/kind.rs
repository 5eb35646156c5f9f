use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token in a log line or query that names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} token: {token:?}")]
pub struct UnknownToken {
    pub kind: &'static str,
    pub token: String,
}

/// What the user did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    /// User logged in
    Login,
    /// User downloaded the plugin
    DownloadPlugin,
    /// User wrote a message
    WriteMessage,
    /// User attempted a task
    SolveTask,
    /// User completed a task
    DoneTask,
}

impl Event {
    pub const ALL: [Event; 5] = [
        Event::Login,
        Event::DownloadPlugin,
        Event::WriteMessage,
        Event::SolveTask,
        Event::DoneTask,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Event::Login => "LOGIN",
            Event::DownloadPlugin => "DOWNLOAD_PLUGIN",
            Event::WriteMessage => "WRITE_MESSAGE",
            Event::SolveTask => "SOLVE_TASK",
            Event::DoneTask => "DONE_TASK",
        }
    }

    /// Task events may carry a task number after a space.
    pub fn is_task(&self) -> bool {
        matches!(self, Event::SolveTask | Event::DoneTask)
    }
}

impl FromStr for Event {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Event::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| UnknownToken { kind: "event", token: s.to_string() })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Ok,
    Failed,
    Error,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Ok, Status::Failed, Status::Error];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Failed => "FAILED",
            Status::Error => "ERROR",
        }
    }
}

impl FromStr for Status {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| UnknownToken { kind: "status", token: s.to_string() })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
