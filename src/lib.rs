//! findash - Transaction categorization and budget reconciliation engine
//!
//! This library is the core of a personal finance dashboard: it normalizes
//! raw bank-statement exports into canonical transactions, classifies each
//! transaction into a user-defined category via keyword rules, persists the
//! category/keyword and budget rule sets, and aggregates transactions into
//! category/month summaries and budget-vs-actual comparisons. Rendering and
//! upload transport live outside this crate; the bundled CLI is a thin
//! collaborator over the engine.
//!
//! # Architecture
//!
//! - `config`: data-directory and store-file path resolution
//! - `error`: custom error types
//! - `models`: money, transactions, category rules
//! - `storage`: JSON file stores with atomic writes
//! - `services`: the normalize -> categorize pipeline
//! - `reports`: aggregation views (expenses, budget vs actual, credits)
//! - `display`: terminal formatting of store listings
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use findash::config::FindashPaths;
//! use findash::reports::ExpenseReport;
//! use findash::services::{categorize, normalize_statement_file};
//! use findash::storage::Storage;
//!
//! let paths = FindashPaths::new()?;
//! let storage = Storage::open(&paths)?;
//!
//! let mut batch = normalize_statement_file("statement.csv")?;
//! categorize(&mut batch, &storage.categories);
//! println!("{}", ExpenseReport::generate(&batch).format_terminal());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FindashError, FindashResult};
