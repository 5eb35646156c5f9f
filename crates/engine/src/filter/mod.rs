//! Filter: entry fields and equality predicates over them.

pub mod field;
pub mod predicate;

pub use field::Field;
pub use predicate::Predicate;
