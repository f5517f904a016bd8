//! Core data models for findash
//!
//! This module contains the data structures of the categorization and
//! reconciliation domain: money, transactions, and category rules.

pub mod category;
pub mod money;
pub mod transaction;

pub use category::{CategoryRule, UNCATEGORIZED};
pub use money::Money;
pub use transaction::{CategorizedBatch, Direction, Transaction};
