//! Credit summary report
//!
//! Incoming payments are reported as a single total plus the raw credit
//! transaction list, unaggregated.

use crate::models::{CategorizedBatch, Money, Transaction};

/// Summary of the credit subset of a batch
#[derive(Debug, Clone)]
pub struct CreditReport {
    /// Sum over all credit transactions
    pub total: Money,

    /// The credit transactions themselves, in statement order
    pub transactions: Vec<Transaction>,
}

impl CreditReport {
    /// Compute the summary from the current batch
    pub fn generate(batch: &CategorizedBatch) -> Self {
        let transactions: Vec<Transaction> = batch.credits().cloned().collect();
        let total = transactions.iter().map(|t| t.amount).sum();

        Self {
            total,
            transactions,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Total Credits: {}\n", self.total));

        if self.transactions.is_empty() {
            output.push_str("  (no credit transactions)\n");
            return output;
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        for txn in &self.transactions {
            let date = txn
                .date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "----------".to_string());
            output.push_str(&format!("  {}  {:<36} {:>12}\n", date, txn.details, txn.amount));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;
    use chrono::NaiveDate;

    fn txn(details: &str, cents: i64, direction: Direction) -> Transaction {
        Transaction::new(
            details,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2024, 1, 1),
            direction,
        )
    }

    #[test]
    fn test_credit_total_and_raw_list() {
        let batch = CategorizedBatch::new(vec![
            txn("Salary", 5000000, Direction::Credit),
            txn("Groceries", 4000, Direction::Debit),
            txn("Refund", 1500, Direction::Credit),
        ]);

        let report = CreditReport::generate(&batch);

        assert_eq!(report.total, Money::from_cents(5001500));
        assert_eq!(report.transactions.len(), 2);
        assert_eq!(report.transactions[0].details, "Salary");
        assert_eq!(report.transactions[1].details, "Refund");
    }

    #[test]
    fn test_empty_batch() {
        let report = CreditReport::generate(&CategorizedBatch::default());
        assert_eq!(report.total, Money::zero());
        assert!(report.transactions.is_empty());
    }
}
