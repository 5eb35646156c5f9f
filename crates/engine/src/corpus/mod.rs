//! Corpus: loading a log directory into entries and slicing it by date.
//!
//! - `load.rs`: directory scan and per-file parsing
//! - `range.rs`: exclusive date-range filter
//! - `cache.rs`: optional per-directory corpus cache
//! - `source.rs`: where queries take their snapshot from

pub mod load;
pub mod range;
pub mod cache;
pub mod source;

pub use load::{Corpus, CorpusLoader, DEFAULT_SUFFIX};
pub use range::{filter_by_date, DateRange};
pub use cache::CorpusCache;
pub use source::{CorpusSource, DirectorySource};
