//! Budget vs. actual report
//!
//! One row per declared category (excluding "Uncategorized"), in store
//! order, comparing the declared budget against actual debit spend.
//! Categories with no matching transactions still appear with a zero actual,
//! so the row count is always the category count minus one.

use crate::models::{CategorizedBatch, Money};
use crate::storage::{BudgetStore, CategoryStore};

use super::expenses::ExpenseReport;

/// One budget comparison row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetRow {
    pub category: String,
    /// Declared budget (zero when none was set)
    pub budget: Money,
    /// Actual debit spend in the batch
    pub actual: Money,
    /// budget - actual; negative means overspent
    pub difference: Money,
}

impl BudgetRow {
    /// Whether actual spend exceeded the budget
    pub fn is_overspent(&self) -> bool {
        self.difference.is_negative()
    }
}

/// Budget vs. actual comparison for one categorized batch
#[derive(Debug, Clone)]
pub struct BudgetOverviewReport {
    pub rows: Vec<BudgetRow>,
}

impl BudgetOverviewReport {
    /// Compute the comparison from the current stores and batch
    pub fn generate(
        categories: &CategoryStore,
        budgets: &BudgetStore,
        batch: &CategorizedBatch,
    ) -> Self {
        let expenses = ExpenseReport::generate(batch);

        let rows = categories
            .rules()
            .iter()
            .filter(|rule| !rule.is_uncategorized())
            .map(|rule| {
                let budget = budgets.get(&rule.name);
                let actual = expenses.total_for(&rule.name);
                BudgetRow {
                    category: rule.name.clone(),
                    budget,
                    actual,
                    difference: budget - actual,
                }
            })
            .collect();

        Self { rows }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Budget vs Actual\n");
        output.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>12}\n",
            "Category", "Budget", "Actual", "Difference"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("  (no categories declared)\n");
        }

        for row in &self.rows {
            let marker = if row.is_overspent() { "  over" } else { "" };
            output.push_str(&format!(
                "{:<24} {:>12} {:>12} {:>12}{}\n",
                row.category, row.budget, row.actual, row.difference, marker
            ));
        }

        output
    }
}
