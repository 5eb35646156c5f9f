use std::collections::HashSet;

use chrono::NaiveDateTime;

use super::LogQuery;
use crate::corpus::DateRange;
use crate::entry::{Entry, Event, Status};
use crate::filter::Predicate;

impl LogQuery {
    pub fn all_dates(&self, range: &DateRange) -> HashSet<NaiveDateTime> {
        self.dates_where(&Predicate::Any, range)
    }

    pub fn number_of_unique_dates(&self, range: &DateRange) -> usize {
        self.all_dates(range).len()
    }

    pub fn dates_for_user_and_event(&self, user: &str, event: Event, range: &DateRange) -> HashSet<NaiveDateTime> {
        self.dates_where(&user_did(user, Predicate::Event(event)), range)
    }

    pub fn dates_when_something_failed(&self, range: &DateRange) -> HashSet<NaiveDateTime> {
        self.dates_where(&Predicate::Status(Status::Failed), range)
    }

    pub fn dates_when_error_happened(&self, range: &DateRange) -> HashSet<NaiveDateTime> {
        self.dates_where(&Predicate::Status(Status::Error), range)
    }

    /// Earliest login of `user` in the range, if any.
    pub fn date_when_user_logged_first_time(&self, user: &str, range: &DateRange) -> Option<NaiveDateTime> {
        self.first(range, &user_did(user, Predicate::Event(Event::Login)))
    }

    /// Earliest attempt by `user` at `task`.
    pub fn date_when_user_solved_task(&self, user: &str, task: u32, range: &DateRange) -> Option<NaiveDateTime> {
        self.first(range, &user_did(user, Predicate::Task(Event::SolveTask, task)))
    }

    /// Earliest completion by `user` of `task`.
    pub fn date_when_user_done_task(&self, user: &str, task: u32, range: &DateRange) -> Option<NaiveDateTime> {
        self.first(range, &user_did(user, Predicate::Task(Event::DoneTask, task)))
    }

    pub fn dates_when_user_wrote_message(&self, user: &str, range: &DateRange) -> HashSet<NaiveDateTime> {
        self.dates_for_user_and_event(user, Event::WriteMessage, range)
    }

    pub fn dates_when_user_downloaded_plugin(&self, user: &str, range: &DateRange) -> HashSet<NaiveDateTime> {
        self.dates_for_user_and_event(user, Event::DownloadPlugin, range)
    }

    fn dates_where(&self, predicate: &Predicate, range: &DateRange) -> HashSet<NaiveDateTime> {
        self.collect(range, predicate, Entry::timestamp)
    }
}

fn user_did(user: &str, what: Predicate) -> Predicate {
    Predicate::User(user.to_string()).and(what)
}
