//! Entry model: the typed record and its closed vocabularies.

pub mod kind;
pub mod model;

pub use kind::{Event, Status, UnknownToken};
pub use model::Entry;
