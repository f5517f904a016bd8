//! Transaction model
//!
//! A Transaction is one normalized record derived from an uploaded statement
//! row. Transactions live for one session only; they are never persisted.
//! Every field except `category` is immutable after normalization — the
//! categorizer is the only writer of `category`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::models::category::UNCATEGORIZED;

/// Whether a transaction is an expense or an incoming payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// An expense
    Debit,
    /// An incoming payment
    Credit,
}

impl Direction {
    /// Parse a direction from statement text, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "debit" => Some(Self::Debit),
            "credit" => Some(Self::Credit),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debit => write!(f, "debit"),
            Self::Credit => write!(f, "credit"),
        }
    }
}

/// One normalized statement record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Free-text details from the statement (keyword matching target)
    pub details: String,

    /// Signed amount
    pub amount: Money,

    /// Transaction date; None when the statement value was unparseable
    /// (date-dependent aggregations skip such records)
    pub date: Option<NaiveDate>,

    /// Debit or credit
    pub direction: Direction,

    /// Assigned category; starts as "Uncategorized"
    pub category: String,
}

impl Transaction {
    /// Create a new, not-yet-classified transaction
    pub fn new(
        details: impl Into<String>,
        amount: Money,
        date: Option<NaiveDate>,
        direction: Direction,
    ) -> Self {
        Self {
            details: details.into(),
            amount,
            date,
            direction,
            category: UNCATEGORIZED.to_string(),
        }
    }

    /// Truncate the date to a `YYYY-MM` month key, if the date is known
    pub fn month_key(&self) -> Option<String> {
        self.date.map(|d| d.format("%Y-%m").to_string())
    }
}

/// The transactions produced by one normalization + categorization pass,
/// partitioned by direction for the aggregation views
#[derive(Debug, Clone, Default)]
pub struct CategorizedBatch {
    transactions: Vec<Transaction>,
}

impl CategorizedBatch {
    /// Wrap a sequence of normalized transactions
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// All transactions, in statement order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Mutable access for the categorizer
    pub(crate) fn transactions_mut(&mut self) -> &mut [Transaction] {
        &mut self.transactions
    }

    /// The debit (expense) subset
    pub fn debits(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.direction == Direction::Debit)
    }

    /// The credit (incoming payment) subset
    pub fn credits(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.direction == Direction::Credit)
    }

    /// Number of transactions in the batch
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the batch is empty
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
