//! Plan: turns one query line into a [`QueryPlan`].
//!
//! Two shapes are accepted:
//!
//! ```text
//! get <field>
//! get <field> for <field> = "<value>" [and date between "<d1>" and "<d2>"]
//! ```
//!
//! Token positions are fixed. Anything that does not fit becomes
//! [`QueryPlan::Unrecognized`]; parsing never fails loudly.

use crate::corpus::DateRange;
use crate::filter::Field;
use crate::parser::DateFormat;

const DATE_CLAUSE: &str = "and date between";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPlan {
    /// `get <field>` over the whole corpus
    Shorthand(Field),
    /// `get <subject> for <predicate> = "<value>"`, optionally date-bounded
    General {
        subject: Field,
        predicate: Field,
        value: String,
        range: DateRange,
    },
    Unrecognized,
}

impl QueryPlan {
    pub fn parse(query: &str, format: &DateFormat) -> Self {
        let query = query.trim();
        if !query.starts_with("get") {
            return QueryPlan::Unrecognized;
        }

        if !query.contains('=') {
            return parse_shorthand(query);
        }

        parse_general(query, format).unwrap_or(QueryPlan::Unrecognized)
    }
}

fn parse_shorthand(query: &str) -> QueryPlan {
    let mut tokens = query.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some("get"), Some(field), None) => field
            .parse()
            .map(QueryPlan::Shorthand)
            .unwrap_or(QueryPlan::Unrecognized),
        _ => QueryPlan::Unrecognized,
    }
}

fn parse_general(query: &str, format: &DateFormat) -> Option<QueryPlan> {
    let (left, right) = query.split_once('=')?;

    let tokens: Vec<&str> = left.split_whitespace().collect();
    if tokens.len() != 4 || tokens[0] != "get" || tokens[2] != "for" {
        return None;
    }
    let subject: Field = tokens[1].parse().ok()?;
    let predicate: Field = tokens[3].parse().ok()?;

    let (value, rest) = first_quoted(right)?;
    let range = rest
        .split_once(DATE_CLAUSE)
        .map(|(_, dates)| parse_between(dates, format))
        .unwrap_or_default();

    Some(QueryPlan::General {
        subject,
        predicate,
        value: value.to_string(),
        range,
    })
}

/// First `"..."` in `text`, and whatever follows its closing quote.
fn first_quoted(text: &str) -> Option<(&str, &str)> {
    let open = text.find('"')?;
    let body = &text[open + 1..];
    let close = body.find('"')?;
    Some((&body[..close], &body[close + 1..]))
}

/// `"<d1>" and "<d2>"` into an exclusive range. Any parse failure leaves
/// both sides unbounded.
fn parse_between(dates: &str, format: &DateFormat) -> DateRange {
    let cleaned = dates.replace('"', "");
    let Some((after, before)) = cleaned.split_once("and") else {
        return DateRange::unbounded();
    };

    match (format.parse(after.trim()), format.parse(before.trim())) {
        (Ok(after), Ok(before)) => DateRange::between(after, before),
        _ => DateRange::unbounded(),
    }
}
