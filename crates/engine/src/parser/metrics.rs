use serde::Serialize;

use super::model::{ParseError, SkipReason};

/// Skipped-line counters, one per failure category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    pub too_large: u64,
    pub non_utf8: u64,
    pub field_count: u64,
    pub timestamp: u64,
    pub event: u64,
    pub task_number: u64,
    pub status: u64,
}

impl SkipCounts {
    pub fn total(&self) -> u64 {
        self.too_large
            + self.non_utf8
            + self.field_count
            + self.timestamp
            + self.event
            + self.task_number
            + self.status
    }

    pub fn get(&self, reason: SkipReason) -> u64 {
        match reason {
            SkipReason::TooLarge => self.too_large,
            SkipReason::NonUtf8 => self.non_utf8,
            SkipReason::FieldCount => self.field_count,
            SkipReason::Timestamp => self.timestamp,
            SkipReason::Event => self.event,
            SkipReason::TaskNumber => self.task_number,
            SkipReason::Status => self.status,
        }
    }

    fn merge(&mut self, other: &SkipCounts) {
        self.too_large += other.too_large;
        self.non_utf8 += other.non_utf8;
        self.field_count += other.field_count;
        self.timestamp += other.timestamp;
        self.event += other.event;
        self.task_number += other.task_number;
        self.status += other.status;
    }

    fn slot(&mut self, reason: SkipReason) -> &mut u64 {
        match reason {
            SkipReason::TooLarge => &mut self.too_large,
            SkipReason::NonUtf8 => &mut self.non_utf8,
            SkipReason::FieldCount => &mut self.field_count,
            SkipReason::Timestamp => &mut self.timestamp,
            SkipReason::Event => &mut self.event,
            SkipReason::TaskNumber => &mut self.task_number,
            SkipReason::Status => &mut self.status,
        }
    }
}

/// Counters gathered while loading a corpus.
///
/// Loading never fails, so these are the only record of what was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub files_read: u64,
    pub files_skipped: u64,
    pub lines_seen: u64,
    pub lines_parsed: u64,
    pub skipped: SkipCounts,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_parse(&mut self) {
        self.lines_seen += 1;
        self.lines_parsed += 1;
    }

    #[inline]
    pub fn record_error(&mut self, error: &ParseError) {
        self.lines_seen += 1;
        *self.skipped.slot(error.reason()) += 1;
    }

    pub fn record_file(&mut self, readable: bool) {
        if readable {
            self.files_read += 1;
        } else {
            self.files_skipped += 1;
        }
    }

    pub fn merge(&mut self, other: &ParseStats) {
        self.files_read += other.files_read;
        self.files_skipped += other.files_skipped;
        self.lines_seen += other.lines_seen;
        self.lines_parsed += other.lines_parsed;
        self.skipped.merge(&other.skipped);
    }

    pub fn lines_skipped(&self) -> u64 {
        self.skipped.total()
    }

    /// Fraction of non-blank lines that became entries.
    pub fn success_rate(&self) -> f64 {
        if self.lines_seen == 0 {
            1.0
        } else {
            self.lines_parsed as f64 / self.lines_seen as f64
        }
    }
}
