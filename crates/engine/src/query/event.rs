use std::collections::{HashMap, HashSet};

use super::LogQuery;
use crate::corpus::DateRange;
use crate::entry::{Entry, Event, Status};
use crate::filter::Predicate;

impl LogQuery {
    pub fn number_of_all_events(&self, range: &DateRange) -> usize {
        self.all_events(range).len()
    }

    pub fn all_events(&self, range: &DateRange) -> HashSet<Event> {
        self.events_where(&Predicate::Any, range)
    }

    pub fn events_for_ip(&self, ip: &str, range: &DateRange) -> HashSet<Event> {
        self.events_where(&Predicate::Ip(ip.to_string()), range)
    }

    pub fn events_for_user(&self, user: &str, range: &DateRange) -> HashSet<Event> {
        self.events_where(&Predicate::User(user.to_string()), range)
    }

    pub fn failed_events(&self, range: &DateRange) -> HashSet<Event> {
        self.events_where(&Predicate::Status(Status::Failed), range)
    }

    pub fn error_events(&self, range: &DateRange) -> HashSet<Event> {
        self.events_where(&Predicate::Status(Status::Error), range)
    }

    /// Number of `SOLVE_TASK` entries for `task` (every attempt counts).
    pub fn number_of_attempts_to_solve_task(&self, task: u32, range: &DateRange) -> usize {
        self.count(range, &Predicate::Task(Event::SolveTask, task))
    }

    /// Number of `DONE_TASK` entries for `task`.
    pub fn number_of_successful_attempts_to_solve_task(&self, task: u32, range: &DateRange) -> usize {
        self.count(range, &Predicate::Task(Event::DoneTask, task))
    }

    /// Task number → attempt count, for every numbered task attempted in the range.
    pub fn all_solved_tasks_and_their_number(&self, range: &DateRange) -> HashMap<u32, usize> {
        self.tally_tasks(Event::SolveTask, range)
    }

    /// Task number → completion count, for every numbered task completed in the range.
    pub fn all_done_tasks_and_their_number(&self, range: &DateRange) -> HashMap<u32, usize> {
        self.tally_tasks(Event::DoneTask, range)
    }

    fn events_where(&self, predicate: &Predicate, range: &DateRange) -> HashSet<Event> {
        self.collect(range, predicate, Entry::event)
    }

    // Every observed task number is a key, 0 for entries that carried none.
    fn tally_tasks(&self, event: Event, range: &DateRange) -> HashMap<u32, usize> {
        let mut tally = HashMap::new();
        for task in self
            .snapshot()
            .in_range(range)
            .filter(|e| e.event() == event)
            .map(Entry::task_number)
        {
            *tally.entry(task).or_insert(0) += 1;
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixture::*;
    use super::*;

    #[test]
    fn test_all_events() {
        let q = query();
        assert_eq!(q.all_events(&all()), set(&Event::ALL));
        assert_eq!(q.all_events(&day_one()), set(&[Event::Login, Event::SolveTask, Event::DoneTask]));
    }

    #[test]
    fn test_number_of_all_events_matches_set() {
        let q = query();
        assert_eq!(q.number_of_all_events(&all()), 5);
        assert_eq!(q.number_of_all_events(&day_one()), q.all_events(&day_one()).len());
    }

    #[test]
    fn test_events_for_ip_and_user() {
        let q = query();
        assert_eq!(
            q.events_for_ip("10.0.0.3", &all()),
            set(&[Event::WriteMessage, Event::DownloadPlugin, Event::SolveTask])
        );
        assert_eq!(
            q.events_for_user("Alice", &all()),
            set(&[Event::Login, Event::SolveTask, Event::DoneTask, Event::WriteMessage])
        );
    }

    #[test]
    fn test_failed_and_error_events() {
        let q = query();
        assert_eq!(q.failed_events(&all()), set(&[Event::Login, Event::SolveTask]));
        assert_eq!(q.error_events(&all()), set(&[Event::WriteMessage, Event::Login]));
    }

    #[test]
    fn test_attempt_counts() {
        let q = query();
        assert_eq!(q.number_of_attempts_to_solve_task(5, &all()), 2);
        assert_eq!(q.number_of_attempts_to_solve_task(7, &all()), 1);
        assert_eq!(q.number_of_attempts_to_solve_task(8, &all()), 0);
        assert_eq!(q.number_of_attempts_to_solve_task(0, &all()), 1);
        assert_eq!(q.number_of_successful_attempts_to_solve_task(0, &all()), 0);
        assert_eq!(q.number_of_successful_attempts_to_solve_task(7, &all()), 2);
        assert_eq!(q.number_of_successful_attempts_to_solve_task(7, &day_one()), 0);
    }

    #[test]
    fn test_task_tallies() {
        let q = query();
        let solved = q.all_solved_tasks_and_their_number(&all());
        // Carol's unnumbered attempt is counted under 0
        assert_eq!(solved, HashMap::from([(0, 1), (5, 2), (7, 1)]));

        let done = q.all_done_tasks_and_their_number(&all());
        assert_eq!(done, HashMap::from([(5, 1), (7, 2)]));

        assert_eq!(q.all_done_tasks_and_their_number(&day_one()), HashMap::from([(5, 1)]));
        assert!(q
            .all_solved_tasks_and_their_number(&DateRange::new(None, Some(at("01.01.2020 00:00:00"))))
            .is_empty());
    }

    #[test]
    fn test_tally_keys_unnumbered_attempts_under_zero() {
        let parser = crate::parser::TabLineParser::default();
        let entries = [
            "10.0.0.1\tAlice\t01.01.2020 10:00:00\tSOLVE_TASK\tOK",
            "10.0.0.1\tAlice\t01.01.2020 10:05:00\tSOLVE_TASK 5\tOK",
        ]
        .iter()
        .map(|l| parser.parse_str(l).unwrap())
        .collect();
        let q = LogQuery::from_entries(entries);

        assert_eq!(q.all_solved_tasks_and_their_number(&all()), HashMap::from([(0, 1), (5, 1)]));
        assert_eq!(q.number_of_attempts_to_solve_task(0, &all()), 1);
        assert!(q.solved_task_users_for(0, &all()).is_empty());
    }

    #[test]
    fn test_tally_agrees_with_per_task_counts() {
        let q = query();
        for (task, n) in q.all_solved_tasks_and_their_number(&all()) {
            assert_eq!(n, q.number_of_attempts_to_solve_task(task, &all()));
        }
        for (task, n) in q.all_done_tasks_and_their_number(&all()) {
            assert_eq!(n, q.number_of_successful_attempts_to_solve_task(task, &all()));
        }
    }
}
