use chrono::NaiveDateTime;

use crate::entry::Entry;

/// Optional lower/upper timestamp bounds, both strictly exclusive.
///
/// An entry stamped exactly `after` or exactly `before` is outside the range.
/// `None` on either side leaves that side unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub after: Option<NaiveDateTime>,
    pub before: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn new(after: Option<NaiveDateTime>, before: Option<NaiveDateTime>) -> Self {
        Self { after, before }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn between(after: NaiveDateTime, before: NaiveDateTime) -> Self {
        Self::new(Some(after), Some(before))
    }

    pub fn is_unbounded(&self) -> bool {
        self.after.is_none() && self.before.is_none()
    }

    #[inline]
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.after.map_or(true, |after| timestamp > after)
            && self.before.map_or(true, |before| timestamp < before)
    }
}

/// Keep the entries whose timestamp lies strictly inside `range`.
pub fn filter_by_date(entries: &[Entry], range: &DateRange) -> Vec<Entry> {
    entries
        .iter()
        .filter(|e| range.contains(e.timestamp()))
        .cloned()
        .collect()
}
