use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDateTime;

use crate::entry::{Event, Status};
use crate::filter::Field;
use crate::parser::DateFormat;

/// Homogeneous result of a textual query.
///
/// The variant says which field the values came from, so callers can render
/// or compare them without guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Ips(HashSet<String>),
    Users(HashSet<String>),
    Dates(HashSet<NaiveDateTime>),
    Events(HashSet<Event>),
    Statuses(HashSet<Status>),
    /// Unrecognized query or field pair
    Empty,
}

impl QueryResult {
    /// Field the values were projected from; `None` for [`QueryResult::Empty`].
    pub fn field(&self) -> Option<Field> {
        match self {
            QueryResult::Ips(_) => Some(Field::Ip),
            QueryResult::Users(_) => Some(Field::User),
            QueryResult::Dates(_) => Some(Field::Date),
            QueryResult::Events(_) => Some(Field::Event),
            QueryResult::Statuses(_) => Some(Field::Status),
            QueryResult::Empty => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.field().map_or("empty", |f| f.as_str())
    }

    pub fn len(&self) -> usize {
        match self {
            QueryResult::Ips(s) | QueryResult::Users(s) => s.len(),
            QueryResult::Dates(s) => s.len(),
            QueryResult::Events(s) => s.len(),
            QueryResult::Statuses(s) => s.len(),
            QueryResult::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values as display strings in natural order: strings lexically,
    /// dates chronologically, events and statuses by declaration order.
    pub fn render(&self, format: &DateFormat) -> Vec<String> {
        match self {
            QueryResult::Ips(s) | QueryResult::Users(s) => {
                let mut v: Vec<String> = s.iter().cloned().collect();
                v.sort();
                v
            }
            QueryResult::Dates(s) => {
                let mut v: Vec<&NaiveDateTime> = s.iter().collect();
                v.sort();
                v.into_iter().map(|ts| format.format(*ts)).collect()
            }
            QueryResult::Events(s) => sorted_tokens(s.iter().copied()),
            QueryResult::Statuses(s) => sorted_tokens(s.iter().copied()),
            QueryResult::Empty => Vec::new(),
        }
    }
}

fn sorted_tokens<T: Ord + fmt::Display>(items: impl Iterator<Item = T>) -> Vec<String> {
    let mut v: Vec<T> = items.collect();
    v.sort();
    v.iter().map(|t| t.to_string()).collect()
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.render(&DateFormat::default()).join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_sorted() {
        let r = QueryResult::Users(["Bob", "Alice", "Carol"].iter().map(|s| s.to_string()).collect());
        assert_eq!(r.to_string(), "[Alice, Bob, Carol]");
        assert_eq!(r.kind(), "user");
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn test_dates_render_chronologically() {
        let fmt = DateFormat::default();
        let r = QueryResult::Dates(
            ["02.01.2020 00:00:00", "31.12.2019 23:59:59", "01.01.2020 12:00:00"]
                .iter()
                .map(|s| fmt.parse(s).unwrap())
                .collect(),
        );
        assert_eq!(
            r.render(&fmt),
            vec!["31.12.2019 23:59:59", "01.01.2020 12:00:00", "02.01.2020 00:00:00"]
        );
    }

    #[test]
    fn test_events_render_in_declaration_order() {
        let r = QueryResult::Events([Event::DoneTask, Event::Login].into_iter().collect());
        assert_eq!(r.to_string(), "[LOGIN, DONE_TASK]");
        assert_eq!(r.field(), Some(Field::Event));
    }

    #[test]
    fn test_empty() {
        let r = QueryResult::Empty;
        assert!(r.is_empty());
        assert_eq!(r.kind(), "empty");
        assert_eq!(r.field(), None);
        assert_eq!(r.to_string(), "[]");
    }
}
