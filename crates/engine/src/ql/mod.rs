//! Textual query interpreter.
//!
//! [`LogQuery::execute`] parses one line into a [`QueryPlan`], resolves the
//! field pair against the [`dispatch`] table and runs it. Nothing here
//! returns an error: malformed input, unknown fields and unconvertible values
//! all come back as an empty result.

pub mod dispatch;
pub mod plan;

use tracing::debug;

use crate::corpus::DateRange;
use crate::filter::Field;
use crate::query::{LogQuery, QueryResult};

pub use dispatch::{route, Route};
pub use plan::QueryPlan;

impl LogQuery {
    pub fn execute(&self, query: &str) -> QueryResult {
        let plan = QueryPlan::parse(query, self.date_format());
        debug!(query = %query.trim(), plan = ?plan, "Executing query");

        match plan {
            QueryPlan::Shorthand(field) => self.shorthand(field),
            QueryPlan::General {
                subject,
                predicate,
                value,
                range,
            } => match route(subject, predicate) {
                Some(route) => route.run(self, &value, &range),
                None => {
                    debug!(%subject, %predicate, "No route for field pair");
                    QueryResult::Empty
                }
            },
            QueryPlan::Unrecognized => QueryResult::Empty,
        }
    }

    fn shorthand(&self, field: Field) -> QueryResult {
        let all = DateRange::unbounded();
        match field {
            Field::Ip => QueryResult::Ips(self.unique_ips(&all)),
            Field::User => QueryResult::Users(self.all_users()),
            Field::Date => QueryResult::Dates(self.all_dates(&all)),
            Field::Event => QueryResult::Events(self.all_events(&all)),
            Field::Status => QueryResult::Statuses(self.all_statuses(&all)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::entry::{Event, Status};
    use crate::parser::TabLineParser;
    use crate::query::fixture;

    fn alice() -> LogQuery {
        let parser = TabLineParser::default();
        let entries = [
            "10.0.0.1\tAlice\t01.01.2020 10:00:00\tLOGIN\tOK",
            "10.0.0.1\tAlice\t01.01.2020 10:05:00\tSOLVE_TASK 5\tOK",
            "10.0.0.1\tAlice\t01.01.2020 10:06:00\tDONE_TASK 5\tOK",
        ]
        .iter()
        .map(|l| parser.parse_str(l).unwrap())
        .collect();
        LogQuery::from_entries(entries)
    }

    #[test]
    fn test_three_line_session() {
        let q = alice();

        assert_eq!(
            q.execute(r#"get user for event = "SOLVE_TASK""#),
            QueryResult::Users(fixture::strings(&["Alice"]))
        );
        assert_eq!(
            q.execute(
                r#"get ip for status = "OK" and date between "01.01.2020 00:00:00" and "02.01.2020 00:00:00""#
            ),
            QueryResult::Ips(fixture::strings(&["10.0.0.1"]))
        );
        assert_eq!(
            q.all_solved_tasks_and_their_number(&DateRange::unbounded()),
            HashMap::from([(5, 1)])
        );
    }

    #[test]
    fn test_shorthand_matches_typed_accessors() {
        let q = fixture::query();
        let all = fixture::all();

        assert_eq!(q.execute("get ip"), QueryResult::Ips(q.unique_ips(&all)));
        assert_eq!(q.execute("get user"), QueryResult::Users(q.all_users()));
        assert_eq!(q.execute("get date"), QueryResult::Dates(q.all_dates(&all)));
        assert_eq!(q.execute("get event"), QueryResult::Events(q.all_events(&all)));
        assert_eq!(q.execute("get status"), QueryResult::Statuses(q.all_statuses(&all)));
    }

    #[test]
    fn test_general_queries_over_fixture() {
        let q = fixture::query();

        assert_eq!(
            q.execute(r#"get event for user = "Carol""#),
            QueryResult::Events(fixture::set(&[Event::DownloadPlugin, Event::SolveTask]))
        );
        assert_eq!(
            q.execute(r#"get status for ip = "10.0.0.4""#),
            QueryResult::Statuses(fixture::set(&[Status::Error]))
        );
        assert_eq!(
            q.execute(r#"get user for date = "02.01.2020 09:00:00""#),
            QueryResult::Users(fixture::strings(&["Bob"]))
        );
        assert_eq!(
            q.execute(r#"get date for status = "FAILED""#),
            QueryResult::Dates(fixture::set(&[
                fixture::at("01.01.2020 11:00:00"),
                fixture::at("01.01.2020 11:10:00"),
            ]))
        );
    }

    #[test]
    fn test_date_clause_bounds_are_exclusive() {
        let q = fixture::query();
        // 10:00:00 sits on the lower bound and is dropped
        assert_eq!(
            q.execute(
                r#"get date for user = "Alice" and date between "01.01.2020 10:00:00" and "01.01.2020 10:06:00""#
            ),
            QueryResult::Dates(fixture::set(&[fixture::at("01.01.2020 10:05:00")]))
        );
    }

    #[test]
    fn test_unconvertible_values_give_empty_sets() {
        let q = fixture::query();
        assert_eq!(
            q.execute(r#"get ip for event = "LOGOUT""#),
            QueryResult::Ips(HashSet::new())
        );
        assert_eq!(
            q.execute(r#"get user for status = "ok""#),
            QueryResult::Users(HashSet::new())
        );
        assert_eq!(
            q.execute(r#"get event for date = "2020-01-01""#),
            QueryResult::Events(HashSet::new())
        );
    }

    #[test]
    fn test_unrecognized_queries_are_empty() {
        let q = fixture::query();
        for query in [
            "",
            "hello",
            "get",
            "get ips",
            r#"get ip for ip = "10.0.0.1""#,
            r#"get ip for status OK"#,
            r#"select ip for status = "OK""#,
        ] {
            assert_eq!(q.execute(query), QueryResult::Empty, "query: {:?}", query);
        }
    }
}
