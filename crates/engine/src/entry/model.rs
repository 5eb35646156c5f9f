use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::kind::{Event, Status};
use crate::parser::format::DateFormat;

/// One parsed activity record.
///
/// Entries are only built by the line parser and never mutated afterwards.
/// `task_number` is 0 unless the event is a task event that carried a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    ip: String,
    name: String,
    timestamp: NaiveDateTime,
    event: Event,
    task_number: u32,
    status: Status,
}

impl Entry {
    pub(crate) fn new(
        ip: impl Into<String>,
        name: impl Into<String>,
        timestamp: NaiveDateTime,
        event: Event,
        task_number: u32,
        status: Status,
    ) -> Self {
        Self {
            ip: ip.into(),
            name: name.into(),
            timestamp,
            event,
            task_number,
            status,
        }
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn event(&self) -> Event {
        self.event
    }

    pub fn task_number(&self) -> u32 {
        self.task_number
    }

    /// The task number, or `None` when the line carried none.
    pub fn task(&self) -> Option<u32> {
        (self.task_number != 0).then_some(self.task_number)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Render back into the tab-separated line layout.
    pub fn to_line(&self, format: &DateFormat) -> String {
        let event = match self.task() {
            Some(task) if self.event.is_task() => format!("{} {}", self.event, task),
            _ => self.event.to_string(),
        };
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.ip,
            self.name,
            format.format(self.timestamp),
            event,
            self.status
        )
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line(&DateFormat::default()))
    }
}
