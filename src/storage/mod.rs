//! Storage layer for findash
//!
//! Two independent durable stores backed by JSON documents with atomic
//! writes: the category -> keyword-list mapping and the category -> budget
//! mapping. Absence of a file means "use defaults"; both documents carry a
//! version tag for future format evolution.

pub mod budgets;
pub mod categories;
pub mod file_io;

pub use budgets::BudgetStore;
pub use categories::CategoryStore;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::FindashPaths;
use crate::error::FindashError;

/// Both durable stores, loaded at session start
pub struct Storage {
    pub categories: CategoryStore,
    pub budgets: BudgetStore,
}

impl Storage {
    /// Open the stores under the given paths, loading durable state
    pub fn open(paths: &FindashPaths) -> Result<Self, FindashError> {
        paths.ensure_directories()?;

        Ok(Self {
            categories: CategoryStore::load(paths.categories_file())?,
            budgets: BudgetStore::load(paths.budgets_file())?,
        })
    }
}
