//! Category rule model
//!
//! A category is a user-defined label with an ordered keyword list used for
//! classification. Keyword order is insertion order: later-added keywords are
//! appended, never sorted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The distinguished fallback category. It always exists, carries no
/// keywords, and can never be deleted.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A category name plus its ordered keyword list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Unique category name
    pub name: String,

    /// Case-insensitive substring patterns, in insertion order
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CategoryRule {
    /// Create a category with an empty keyword list
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keywords: Vec::new(),
        }
    }

    /// Create the distinguished "Uncategorized" rule
    pub fn uncategorized() -> Self {
        Self::new(UNCATEGORIZED)
    }

    /// Whether this is the distinguished fallback rule
    pub fn is_uncategorized(&self) -> bool {
        self.name == UNCATEGORIZED
    }
}

impl fmt::Display for CategoryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
