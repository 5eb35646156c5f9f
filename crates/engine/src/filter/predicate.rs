use chrono::NaiveDateTime;

use super::field::Field;
use crate::entry::{Entry, Event, Status};
use crate::parser::DateFormat;

/// Equality test over one or more entry fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Matches every entry
    Any,
    /// Matches no entry; what an unconvertible query value turns into
    Never,
    Ip(String),
    User(String),
    Date(NaiveDateTime),
    Event(Event),
    Status(Status),
    /// Given event with exactly this task number, 0 included
    Task(Event, u32),
    /// Like `Task`, but a task number of 0 matches nothing
    NumberedTask(Event, u32),
    /// Every inner predicate holds
    All(Vec<Predicate>),
}

impl Predicate {
    /// Equality on `field` against a textual value.
    ///
    /// A value that does not convert to the field's type (bad date, unknown
    /// event or status token) yields [`Predicate::Never`].
    pub fn equals(field: Field, value: &str, format: &DateFormat) -> Self {
        match field {
            Field::Ip => Predicate::Ip(value.to_string()),
            Field::User => Predicate::User(value.to_string()),
            Field::Date => format.parse(value).map(Predicate::Date).unwrap_or(Predicate::Never),
            Field::Event => value.parse().map(Predicate::Event).unwrap_or(Predicate::Never),
            Field::Status => value.parse().map(Predicate::Status).unwrap_or(Predicate::Never),
        }
    }

    pub fn and(self, other: Predicate) -> Self {
        match (self, other) {
            (Predicate::Any, p) | (p, Predicate::Any) => p,
            (Predicate::Never, _) | (_, Predicate::Never) => Predicate::Never,
            (Predicate::All(mut a), Predicate::All(b)) => {
                a.extend(b);
                Predicate::All(a)
            }
            (Predicate::All(mut a), p) | (p, Predicate::All(mut a)) => {
                a.push(p);
                Predicate::All(a)
            }
            (a, b) => Predicate::All(vec![a, b]),
        }
    }

    #[inline]
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            Predicate::Any => true,
            Predicate::Never => false,
            Predicate::Ip(ip) => entry.ip() == ip,
            Predicate::User(name) => entry.name() == name,
            Predicate::Date(ts) => entry.timestamp() == *ts,
            Predicate::Event(event) => entry.event() == *event,
            Predicate::Status(status) => entry.status() == *status,
            Predicate::Task(event, task) => entry.event() == *event && entry.task_number() == *task,
            Predicate::NumberedTask(event, task) => {
                *task != 0 && entry.event() == *event && entry.task_number() == *task
            }
            Predicate::All(all) => all.iter().all(|p| p.matches(entry)),
        }
    }
}
