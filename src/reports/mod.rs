//! Reports module for findash
//!
//! The aggregation views over a categorized batch: category totals and
//! monthly trend, budget-vs-actual comparison, and the credit summary. Each
//! report is computed fresh on every generation.

pub mod budget_overview;
pub mod credits;
pub mod expenses;

pub use budget_overview::{BudgetOverviewReport, BudgetRow};
pub use credits::CreditReport;
pub use expenses::{CategoryTotal, ExpenseReport, TrendRow};
