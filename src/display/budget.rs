//! Budget display formatting
//!
//! Formats the current budgets listing for terminal output.

use crate::models::Money;

/// Format the name-sorted budgets listing
pub fn format_budget_list<'a>(budgets: impl Iterator<Item = (&'a str, Money)>) -> String {
    let rows: Vec<_> = budgets.collect();

    if rows.is_empty() {
        return "No budgets declared.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<24} {:>12}\n", "Category", "Budget"));
    output.push_str(&"-".repeat(38));
    output.push('\n');

    for (name, amount) in rows {
        output.push_str(&format!("{:<24} {:>12}\n", name, amount));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_listing() {
        assert_eq!(
            format_budget_list(std::iter::empty()),
            "No budgets declared."
        );
    }

    #[test]
    fn test_rows_rendered() {
        let rows = vec![("Food", Money::from_cents(50000)), ("Rent", Money::from_cents(120000))];
        let out = format_budget_list(rows.into_iter());

        assert!(out.contains("Food"));
        assert!(out.contains("500.00"));
        assert!(out.contains("1200.00"));
    }
}
