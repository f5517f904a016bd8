//! Service layer for findash
//!
//! The normalize -> categorize pipeline that turns a raw statement export
//! into a classified batch, ready for aggregation.

pub mod categorize;
pub mod normalize;

pub use categorize::categorize;
pub use normalize::{normalize_statement, normalize_statement_file};
