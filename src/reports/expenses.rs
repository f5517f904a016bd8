//! Expense report
//!
//! Category-wise totals and the month-by-month category trend over the debit
//! subset of a batch. Always computed fresh from the batch; nothing is
//! cached, so store edits are reflected on the next generation.

use std::collections::HashMap;

use crate::models::{CategorizedBatch, Money};

/// Total debit amount for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Debit total for one (month, category) cell of the trend view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendRow {
    /// Month key formatted as `YYYY-MM`
    pub month: String,
    pub category: String,
    pub total: Money,
}

/// Category-wise expense summary for one categorized batch
#[derive(Debug, Clone)]
pub struct ExpenseReport {
    /// Per-category debit totals, sorted by amount descending
    pub totals: Vec<CategoryTotal>,

    /// Monthly spend per category, months ascending; debits without a
    /// parseable date are skipped here (but still counted in `totals`)
    pub monthly_trend: Vec<TrendRow>,

    /// Sum over all debit transactions
    pub total_spending: Money,
}

impl ExpenseReport {
    /// Compute the report from the current batch
    pub fn generate(batch: &CategorizedBatch) -> Self {
        let mut by_category: HashMap<&str, Money> = HashMap::new();
        let mut by_month: HashMap<(String, &str), Money> = HashMap::new();
        let mut total_spending = Money::zero();

        for txn in batch.debits() {
            *by_category.entry(txn.category.as_str()).or_default() += txn.amount;
            total_spending += txn.amount;

            if let Some(month) = txn.month_key() {
                *by_month.entry((month, txn.category.as_str())).or_default() += txn.amount;
            }
        }

        let mut totals: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category: category.to_string(),
                total,
            })
            .collect();
        // Largest spend first; name breaks ties so output is stable
        totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));

        let mut monthly_trend: Vec<TrendRow> = by_month
            .into_iter()
            .map(|((month, category), total)| TrendRow {
                month,
                category: category.to_string(),
                total,
            })
            .collect();
        monthly_trend.sort_by(|a, b| {
            a.month
                .cmp(&b.month)
                .then_with(|| a.category.cmp(&b.category))
        });

        Self {
            totals,
            monthly_trend,
            total_spending,
        }
    }

    /// Total for one category, zero if it never appears
    pub fn total_for(&self, category: &str) -> Money {
        self.totals
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.total)
            .unwrap_or_default()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Category-wise Expense Summary\n");
        output.push_str(&"-".repeat(44));
        output.push('\n');

        if self.totals.is_empty() {
            output.push_str("  (no debit transactions)\n");
        }

        for row in &self.totals {
            output.push_str(&format!("  {:<28} {:>12}\n", row.category, row.total));
        }

        output.push_str(&"-".repeat(44));
        output.push('\n');
        output.push_str(&format!("  {:<28} {:>12}\n", "Total", self.total_spending));

        if !self.monthly_trend.is_empty() {
            output.push_str("\nMonthly Spending by Category\n");
            output.push_str(&"-".repeat(44));
            output.push('\n');
            for row in &self.monthly_trend {
                output.push_str(&format!(
                    "  {}  {:<20} {:>12}\n",
                    row.month, row.category, row.total
                ));
            }
        }

        output
    }
}
