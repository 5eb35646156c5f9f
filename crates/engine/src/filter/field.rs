use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::entry::UnknownToken;

/// Entry fields addressable from the query language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Ip,
    User,
    Date,
    Event,
    Status,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Ip, Field::User, Field::Date, Field::Event, Field::Status];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Ip => "ip",
            Field::User => "user",
            Field::Date => "date",
            Field::Event => "event",
            Field::Status => "status",
        }
    }
}

impl FromStr for Field {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownToken { kind: "field", token: s.to_string() })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
