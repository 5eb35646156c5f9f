pub use super::model::{ParseError, SkipReason};
use crate::entry::Entry;

pub trait EntryParser: Send + Sync {
    /// parse one raw log line into an entry
    fn parse(&self, raw: &[u8]) -> Result<Entry, ParseError>;
}
