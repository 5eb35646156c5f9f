/// Line parsing for the tab-separated activity log.
///
/// # Architecture
///
/// - `traits.rs`: the `EntryParser` seam
/// - `tab.rs`: the tab-separated line parser
/// - `format.rs`: the immutable timestamp layout
/// - `model.rs`: parse errors and skip categories
/// - `metrics.rs`: per-load skip accounting
///
/// A line either becomes an `Entry` or is rejected with a `ParseError`.
/// Callers decide what to do with rejections; the corpus loader drops them.

pub mod traits;
pub mod tab;
pub mod format;
pub mod model;
pub mod metrics;

pub use traits::EntryParser;
pub use tab::TabLineParser;
pub use format::DateFormat;
pub use model::{Diagnostic, ParseError, SkipReason};
pub use metrics::ParseStats;

// Constants
pub const MAX_LINE_SIZE: usize = 1_048_576; // 1MB
pub const FIELD_COUNT: usize = 5;
