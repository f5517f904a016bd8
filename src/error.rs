//! Custom error types for findash
//!
//! This module defines the error hierarchy for the engine using thiserror
//! for ergonomic error definitions.
//!
//! Propagation policy: statement-parsing failures reject the whole upload
//! with no partial batch; store-mutation failures are non-fatal statuses the
//! caller displays, leaving prior state intact.

use thiserror::Error;

use crate::models::Money;

/// The main error type for findash operations
#[derive(Error, Debug)]
pub enum FindashError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed statement input (missing or uncoercible required columns);
    /// the batch is rejected wholesale
    #[error("Statement format error: {0}")]
    Format(String),

    /// A single field could not be coerced (typically an amount)
    #[error("Could not parse {field}: '{value}'")]
    Parse { field: &'static str, value: String },

    /// A budget amount was negative
    #[error("Budget amount cannot be negative: {0}")]
    InvalidAmount(Money),

    /// Validation errors for store mutations
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors (durable-store read/write failures)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FindashError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for keywords
    pub fn keyword_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Keyword",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for categories
    pub fn duplicate_category(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error is a non-fatal store-mutation status rather than
    /// a failure that should abort the process
    pub fn is_status(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::Duplicate { .. }
                | Self::InvalidAmount(_)
                | Self::Validation(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FindashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FindashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for findash operations
pub type FindashResult<T> = Result<T, FindashError>;
