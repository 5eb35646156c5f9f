//! Typed queries over a log corpus.
//!
//! Every accessor takes a [`DateRange`] (both bounds exclusive, either may be
//! open), pulls a fresh snapshot from the [`CorpusSource`], filters it with a
//! [`Predicate`] and projects the survivors. Set-valued accessors deduplicate;
//! every `number_of_*` counter is the size of the matching set.
//!
//! The accessors are grouped by what they return:
//! - `ip.rs`: client addresses
//! - `user.rs`: user names
//! - `date.rs`: timestamps, including first-occurrence lookups
//! - `event.rs`: events and per-task aggregates
//! - `status.rs`: statuses

pub mod result;
mod ip;
mod user;
mod date;
mod event;
mod status;

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::conf::CorpusConfig;
use crate::corpus::{Corpus, CorpusSource, DateRange, DirectorySource};
use crate::entry::Entry;
use crate::filter::{Field, Predicate};
use crate::parser::DateFormat;

pub use result::QueryResult;

pub struct LogQuery {
    source: Box<dyn CorpusSource>,
    format: DateFormat,
}

impl LogQuery {
    pub fn new(source: impl CorpusSource + 'static, format: DateFormat) -> Self {
        Self {
            source: Box::new(source),
            format,
        }
    }

    pub fn from_config(config: &CorpusConfig) -> Self {
        Self::new(DirectorySource::from_config(config), config.date_format())
    }

    /// Query a fixed, in-memory set of entries.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self::new(Arc::new(Corpus::from_entries(entries)), DateFormat::default())
    }

    pub fn date_format(&self) -> &DateFormat {
        &self.format
    }

    pub fn snapshot(&self) -> Arc<Corpus> {
        self.source.snapshot()
    }

    /// All entries inside `range`.
    pub fn entries(&self, range: &DateRange) -> Vec<Entry> {
        self.snapshot().in_range(range).cloned().collect()
    }

    /// Filter + projection into a deduplicated set.
    pub fn collect<T, F>(&self, range: &DateRange, predicate: &Predicate, project: F) -> HashSet<T>
    where
        T: Eq + Hash,
        F: Fn(&Entry) -> T,
    {
        self.snapshot()
            .in_range(range)
            .filter(|e| predicate.matches(e))
            .map(project)
            .collect()
    }

    /// Number of matching entries (not distinct values).
    pub fn count(&self, range: &DateRange, predicate: &Predicate) -> usize {
        self.snapshot()
            .in_range(range)
            .filter(|e| predicate.matches(e))
            .count()
    }

    /// Earliest timestamp among matching entries.
    pub fn first(&self, range: &DateRange, predicate: &Predicate) -> Option<NaiveDateTime> {
        self.snapshot()
            .in_range(range)
            .filter(|e| predicate.matches(e))
            .map(Entry::timestamp)
            .min()
    }

    /// Project `subject` out of every entry matching `predicate`.
    pub fn select(&self, subject: Field, predicate: &Predicate, range: &DateRange) -> QueryResult {
        match subject {
            Field::Ip => QueryResult::Ips(self.collect(range, predicate, |e| e.ip().to_string())),
            Field::User => QueryResult::Users(self.collect(range, predicate, |e| e.name().to_string())),
            Field::Date => QueryResult::Dates(self.collect(range, predicate, Entry::timestamp)),
            Field::Event => QueryResult::Events(self.collect(range, predicate, Entry::event)),
            Field::Status => QueryResult::Statuses(self.collect(range, predicate, Entry::status)),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    use super::*;
    use crate::parser::TabLineParser;

    /// Small corpus spread over two days, used by every query test.
    pub const LINES: &[&str] = &[
        "10.0.0.1\tAlice\t01.01.2020 10:00:00\tLOGIN\tOK",
        "10.0.0.1\tAlice\t01.01.2020 10:05:00\tSOLVE_TASK 5\tOK",
        "10.0.0.1\tAlice\t01.01.2020 10:06:00\tDONE_TASK 5\tOK",
        "10.0.0.2\tBob\t01.01.2020 11:00:00\tLOGIN\tFAILED",
        "10.0.0.2\tBob\t01.01.2020 11:01:00\tLOGIN\tOK",
        "10.0.0.2\tBob\t01.01.2020 11:10:00\tSOLVE_TASK 5\tFAILED",
        "10.0.0.2\tBob\t01.01.2020 11:20:00\tSOLVE_TASK 7\tOK",
        "10.0.0.3\tBob\t02.01.2020 09:00:00\tWRITE_MESSAGE\tERROR",
        "10.0.0.3\tCarol\t02.01.2020 09:30:00\tDOWNLOAD_PLUGIN\tOK",
        "10.0.0.3\tCarol\t02.01.2020 09:40:00\tSOLVE_TASK\tOK",
        "10.0.0.1\tAlice\t02.01.2020 12:00:00\tWRITE_MESSAGE\tOK",
        // Deliberately out of order: earlier than Alice's first login above
        "10.0.0.4\tAlice\t31.12.2019 23:00:00\tLOGIN\tERROR",
        "10.0.0.2\tBob\t02.01.2020 13:00:00\tDONE_TASK 7\tOK",
        "10.0.0.2\tBob\t02.01.2020 13:05:00\tDONE_TASK 7\tOK",
    ];

    pub fn query() -> LogQuery {
        let parser = TabLineParser::default();
        let entries = LINES.iter().map(|l| parser.parse_str(l).unwrap()).collect();
        LogQuery::from_entries(entries)
    }

    pub fn at(text: &str) -> NaiveDateTime {
        DateFormat::default().parse(text).unwrap()
    }

    pub fn set<T: Eq + Hash + Clone>(items: &[T]) -> HashSet<T> {
        items.iter().cloned().collect()
    }

    pub fn strings(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    pub fn all() -> DateRange {
        DateRange::unbounded()
    }

    /// 01.01.2020 00:00:00 < t < 02.01.2020 00:00:00
    pub fn day_one() -> DateRange {
        DateRange::between(at("01.01.2020 00:00:00"), at("02.01.2020 00:00:00"))
    }
}
