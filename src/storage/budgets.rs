//! Budget store: durable category -> budget-amount mapping
//!
//! Budgets are set independently of the category store; an entry may outlive
//! its category (stale entries are tolerated, not purged). Unlike the
//! category store, budgets are typically edited in bulk, so mutation and
//! flush are separate operations.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{FindashError, FindashResult};
use crate::models::Money;

use super::file_io::{read_json, write_json_atomic};

/// Current persisted document version
const DOCUMENT_VERSION: u32 = 1;

fn default_version() -> u32 {
    DOCUMENT_VERSION
}

/// Serializable budget document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetData {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub budgets: BTreeMap<String, Money>,
}

impl Default for BudgetData {
    fn default() -> Self {
        Self {
            version: DOCUMENT_VERSION,
            budgets: BTreeMap::new(),
        }
    }
}

/// Durable store of per-category budget amounts
pub struct BudgetStore {
    path: PathBuf,
    budgets: BTreeMap<String, Money>,
}

impl BudgetStore {
    /// Load the store from disk; a missing file yields an empty store
    pub fn load(path: PathBuf) -> FindashResult<Self> {
        let data: BudgetData = read_json(&path)?;
        Ok(Self {
            path,
            budgets: data.budgets,
        })
    }

    /// Get the budget for a category, defaulting to zero if absent
    pub fn get(&self, category: &str) -> Money {
        self.budgets.get(category).copied().unwrap_or_default()
    }

    /// Set a budget amount in memory
    ///
    /// Negative amounts are rejected with `InvalidAmount`; the store is
    /// left unchanged. Call [`flush`](Self::flush) to persist.
    pub fn set(&mut self, category: &str, amount: Money) -> FindashResult<()> {
        if amount.is_negative() {
            return Err(FindashError::InvalidAmount(amount));
        }

        self.budgets.insert(category.to_string(), amount);
        Ok(())
    }

    /// Set a budget amount and persist immediately
    pub fn set_and_flush(&mut self, category: &str, amount: Money) -> FindashResult<()> {
        self.set(category, amount)?;
        self.flush()
    }

    /// Persist the full mapping atomically
    pub fn flush(&self) -> FindashResult<()> {
        let data = BudgetData {
            version: DOCUMENT_VERSION,
            budgets: self.budgets.clone(),
        };
        write_json_atomic(&self.path, &data)
    }

    /// All budgets, sorted by category name
    pub fn budgets(&self) -> impl Iterator<Item = (&str, Money)> {
        self.budgets.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    /// Number of budget entries
    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    /// Whether any budget has been declared
    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }
}
