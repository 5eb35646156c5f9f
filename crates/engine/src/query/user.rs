use std::collections::HashSet;

use super::LogQuery;
use crate::corpus::DateRange;
use crate::entry::{Entry, Event};
use crate::filter::Predicate;

impl LogQuery {
    /// Every user name in the corpus, regardless of date.
    pub fn all_users(&self) -> HashSet<String> {
        self.users_where(&Predicate::Any, &DateRange::unbounded())
    }

    pub fn number_of_users(&self, range: &DateRange) -> usize {
        self.users_where(&Predicate::Any, range).len()
    }

    /// How many distinct kinds of event the user produced.
    pub fn number_of_user_events(&self, user: &str, range: &DateRange) -> usize {
        self.collect(range, &Predicate::User(user.to_string()), Entry::event)
            .len()
    }

    pub fn users_for_ip(&self, ip: &str, range: &DateRange) -> HashSet<String> {
        self.users_where(&Predicate::Ip(ip.to_string()), range)
    }

    pub fn logged_users(&self, range: &DateRange) -> HashSet<String> {
        self.users_where(&Predicate::Event(Event::Login), range)
    }

    pub fn downloaded_plugin_users(&self, range: &DateRange) -> HashSet<String> {
        self.users_where(&Predicate::Event(Event::DownloadPlugin), range)
    }

    pub fn wrote_message_users(&self, range: &DateRange) -> HashSet<String> {
        self.users_where(&Predicate::Event(Event::WriteMessage), range)
    }

    /// Users who attempted any task, numbered or not.
    pub fn solved_task_users(&self, range: &DateRange) -> HashSet<String> {
        self.users_where(&Predicate::Event(Event::SolveTask), range)
    }

    pub fn solved_task_users_for(&self, task: u32, range: &DateRange) -> HashSet<String> {
        self.users_where(&Predicate::NumberedTask(Event::SolveTask, task), range)
    }

    /// Users who completed any task, numbered or not.
    pub fn done_task_users(&self, range: &DateRange) -> HashSet<String> {
        self.users_where(&Predicate::Event(Event::DoneTask), range)
    }

    pub fn done_task_users_for(&self, task: u32, range: &DateRange) -> HashSet<String> {
        self.users_where(&Predicate::NumberedTask(Event::DoneTask, task), range)
    }

    fn users_where(&self, predicate: &Predicate, range: &DateRange) -> HashSet<String> {
        self.collect(range, predicate, |e| e.name().to_string())
    }
}
