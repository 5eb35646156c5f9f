// Activity-log parsing and query engine.

// Core model
pub mod entry;
pub mod parser;
pub mod filter;
pub mod error;

// Loading and querying
pub mod conf;
pub mod corpus;
pub mod query;
pub mod ql;

pub use conf::TasklogConfig;
pub use corpus::{Corpus, CorpusLoader, DateRange};
pub use entry::{Entry, Event, Status};
pub use error::{ConfigError, ConfigResult};
pub use query::{LogQuery, QueryResult};
