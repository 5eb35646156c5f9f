use std::collections::HashSet;

use super::LogQuery;
use crate::corpus::DateRange;
use crate::entry::{Entry, Status};
use crate::filter::Predicate;

impl LogQuery {
    pub fn number_of_unique_statuses(&self, range: &DateRange) -> usize {
        self.all_statuses(range).len()
    }

    pub fn all_statuses(&self, range: &DateRange) -> HashSet<Status> {
        self.collect(range, &Predicate::Any, Entry::status)
    }
}
