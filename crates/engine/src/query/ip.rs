use std::collections::HashSet;

use super::LogQuery;
use crate::corpus::DateRange;
use crate::entry::{Event, Status};
use crate::filter::Predicate;

impl LogQuery {
    pub fn number_of_unique_ips(&self, range: &DateRange) -> usize {
        self.unique_ips(range).len()
    }

    pub fn unique_ips(&self, range: &DateRange) -> HashSet<String> {
        self.ips_where(&Predicate::Any, range)
    }

    /// Addresses the user connected from.
    pub fn ips_for_user(&self, user: &str, range: &DateRange) -> HashSet<String> {
        self.ips_where(&Predicate::User(user.to_string()), range)
    }

    pub fn ips_for_event(&self, event: Event, range: &DateRange) -> HashSet<String> {
        self.ips_where(&Predicate::Event(event), range)
    }

    pub fn ips_for_status(&self, status: Status, range: &DateRange) -> HashSet<String> {
        self.ips_where(&Predicate::Status(status), range)
    }

    fn ips_where(&self, predicate: &Predicate, range: &DateRange) -> HashSet<String> {
        self.collect(range, predicate, |e| e.ip().to_string())
    }
}
