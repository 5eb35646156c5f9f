//! Dispatch: the `(subject, predicate)` routing table.
//!
//! Every off-diagonal pair of the five fields has exactly one row. Rows with
//! a named typed accessor call it; the rest filter and project directly.

use crate::corpus::DateRange;
use crate::entry::{Event, Status};
use crate::filter::{Field, Predicate};
use crate::query::{LogQuery, QueryResult};

type Handler = fn(&LogQuery, &str, &DateRange) -> QueryResult;

pub struct Route {
    pub subject: Field,
    pub predicate: Field,
    handler: Handler,
}

impl Route {
    pub fn run(&self, query: &LogQuery, value: &str, range: &DateRange) -> QueryResult {
        (self.handler)(query, value, range)
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Route({} for {})", self.subject, self.predicate)
    }
}

pub static ROUTES: [Route; 20] = [
    // ip
    Route {
        subject: Field::Ip,
        predicate: Field::User,
        handler: |q, v, r| QueryResult::Ips(q.ips_for_user(v, r)),
    },
    Route {
        subject: Field::Ip,
        predicate: Field::Date,
        handler: |q, v, r| direct(q, Field::Ip, Field::Date, v, r),
    },
    Route {
        subject: Field::Ip,
        predicate: Field::Event,
        handler: |q, v, r| {
            QueryResult::Ips(v.parse::<Event>().map(|e| q.ips_for_event(e, r)).unwrap_or_default())
        },
    },
    Route {
        subject: Field::Ip,
        predicate: Field::Status,
        handler: |q, v, r| {
            QueryResult::Ips(v.parse::<Status>().map(|s| q.ips_for_status(s, r)).unwrap_or_default())
        },
    },
    // user
    Route {
        subject: Field::User,
        predicate: Field::Ip,
        handler: |q, v, r| QueryResult::Users(q.users_for_ip(v, r)),
    },
    Route {
        subject: Field::User,
        predicate: Field::Date,
        handler: |q, v, r| direct(q, Field::User, Field::Date, v, r),
    },
    Route {
        subject: Field::User,
        predicate: Field::Event,
        handler: |q, v, r| direct(q, Field::User, Field::Event, v, r),
    },
    Route {
        subject: Field::User,
        predicate: Field::Status,
        handler: |q, v, r| direct(q, Field::User, Field::Status, v, r),
    },
    // date
    Route {
        subject: Field::Date,
        predicate: Field::Ip,
        handler: |q, v, r| direct(q, Field::Date, Field::Ip, v, r),
    },
    Route {
        subject: Field::Date,
        predicate: Field::User,
        handler: |q, v, r| direct(q, Field::Date, Field::User, v, r),
    },
    Route {
        subject: Field::Date,
        predicate: Field::Event,
        handler: |q, v, r| direct(q, Field::Date, Field::Event, v, r),
    },
    Route {
        subject: Field::Date,
        predicate: Field::Status,
        handler: |q, v, r| direct(q, Field::Date, Field::Status, v, r),
    },
    // event
    Route {
        subject: Field::Event,
        predicate: Field::Ip,
        handler: |q, v, r| QueryResult::Events(q.events_for_ip(v, r)),
    },
    Route {
        subject: Field::Event,
        predicate: Field::User,
        handler: |q, v, r| QueryResult::Events(q.events_for_user(v, r)),
    },
    Route {
        subject: Field::Event,
        predicate: Field::Date,
        handler: |q, v, r| direct(q, Field::Event, Field::Date, v, r),
    },
    Route {
        subject: Field::Event,
        predicate: Field::Status,
        handler: |q, v, r| direct(q, Field::Event, Field::Status, v, r),
    },
    // status
    Route {
        subject: Field::Status,
        predicate: Field::Ip,
        handler: |q, v, r| direct(q, Field::Status, Field::Ip, v, r),
    },
    Route {
        subject: Field::Status,
        predicate: Field::User,
        handler: |q, v, r| direct(q, Field::Status, Field::User, v, r),
    },
    Route {
        subject: Field::Status,
        predicate: Field::Date,
        handler: |q, v, r| direct(q, Field::Status, Field::Date, v, r),
    },
    Route {
        subject: Field::Status,
        predicate: Field::Event,
        handler: |q, v, r| direct(q, Field::Status, Field::Event, v, r),
    },
];

pub fn route(subject: Field, predicate: Field) -> Option<&'static Route> {
    ROUTES
        .iter()
        .find(|r| r.subject == subject && r.predicate == predicate)
}

fn direct(query: &LogQuery, subject: Field, predicate: Field, value: &str, range: &DateRange) -> QueryResult {
    let predicate = Predicate::equals(predicate, value, query.date_format());
    query.select(subject, &predicate, range)
}
