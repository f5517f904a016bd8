//! Keyword classification pass
//!
//! Assigns a category to every transaction in a batch by walking the
//! category store in stored order and matching keywords as case-insensitive
//! substrings of the transaction details.
//!
//! Assignment is an unconditional overwrite rather than first-match-wins:
//! when a transaction matches keywords from several categories, the last
//! matching category in store order ends up on the transaction. This
//! precedence is observable behavior the engine guarantees; do not "fix" it
//! to stop at the first match.

use crate::models::CategorizedBatch;
use crate::storage::CategoryStore;

/// Classify every transaction in the batch against the current rule set
///
/// Transactions matching no keyword keep `"Uncategorized"`. Never fails; an
/// empty keyword set across all categories simply leaves the batch
/// uncategorized.
pub fn categorize(batch: &mut CategorizedBatch, store: &CategoryStore) {
    for rule in store.rules() {
        if rule.is_uncategorized() || rule.keywords.is_empty() {
            continue;
        }

        for keyword in &rule.keywords {
            let needle = keyword.to_lowercase();

            for txn in batch.transactions_mut() {
                if txn.details.to_lowercase().contains(&needle) {
                    txn.category = rule.name.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Direction, Money, Transaction};
    use crate::storage::CategoryStore;
    use tempfile::TempDir;

    fn store_with(categories: &[(&str, &[&str])]) -> (TempDir, CategoryStore) {
        let temp_dir = TempDir::new().unwrap();
        let mut store = CategoryStore::load(temp_dir.path().join("categories.json")).unwrap();
        for (name, keywords) in categories {
            store.add_category(name).unwrap();
            for keyword in *keywords {
                store.add_keyword(name, keyword).unwrap();
            }
        }
        (temp_dir, store)
    }

    fn batch_of(details: &[&str]) -> CategorizedBatch {
        CategorizedBatch::new(
            details
                .iter()
                .map(|d| Transaction::new(*d, Money::from_cents(100), None, Direction::Debit))
                .collect(),
        )
    }

    #[test]
    fn test_keyword_match_assigns_category() {
        let (_tmp, store) = store_with(&[("Food", &["coffee"])]);
        let mut batch = batch_of(&["Coffee Shop", "Gas Station"]);

        categorize(&mut batch, &store);

        assert_eq!(batch.transactions()[0].category, "Food");
        assert_eq!(batch.transactions()[1].category, "Uncategorized");
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let (_tmp, store) = store_with(&[("Food", &["COFFEE"])]);
        let mut batch = batch_of(&["downtown coffee house"]);

        categorize(&mut batch, &store);

        assert_eq!(batch.transactions()[0].category, "Food");
    }

    #[test]
    fn test_last_category_in_store_order_wins() {
        // A and B both claim "foo"; B was declared later, so B wins
        let (_tmp, store) = store_with(&[("A", &["foo"]), ("B", &["foo"])]);
        let mut batch = batch_of(&["foo bar"]);

        categorize(&mut batch, &store);

        assert_eq!(batch.transactions()[0].category, "B");
    }

    #[test]
    fn test_later_keyword_of_same_category_does_not_demote() {
        let (_tmp, store) = store_with(&[("A", &["foo"]), ("B", &["bar"])]);
        let mut batch = batch_of(&["foo only"]);

        categorize(&mut batch, &store);

        assert_eq!(batch.transactions()[0].category, "A");
    }

    #[test]
    fn test_empty_keyword_lists_leave_everything_uncategorized() {
        let (_tmp, store) = store_with(&[("Food", &[]), ("Rent", &[])]);
        let mut batch = batch_of(&["Coffee Shop"]);

        categorize(&mut batch, &store);

        assert_eq!(batch.transactions()[0].category, "Uncategorized");
    }

    #[test]
    fn test_empty_details_never_match() {
        let (_tmp, store) = store_with(&[("Food", &["coffee"])]);
        let mut batch = batch_of(&[""]);

        categorize(&mut batch, &store);

        assert_eq!(batch.transactions()[0].category, "Uncategorized");
    }

    #[test]
    fn test_assigned_category_always_exists_in_store() {
        let (_tmp, store) = store_with(&[("Food", &["coffee"]), ("Transport", &["uber", "fuel"])]);
        let mut batch = batch_of(&["Coffee Shop", "Uber ride", "Unknown Vendor", "fuel stop"]);

        categorize(&mut batch, &store);

        for txn in batch.transactions() {
            assert!(
                store.contains(&txn.category),
                "category '{}' not in store",
                txn.category
            );
        }
    }
}
