//! Category store: durable category -> keyword-list mapping
//!
//! Categories are kept in document order, which is also the precedence order
//! the categorizer walks. Every mutating operation is followed by an
//! immediate atomic flush; there is no batching. The distinguished
//! "Uncategorized" category is present at all times and is never deletable.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{FindashError, FindashResult};
use crate::models::{CategoryRule, UNCATEGORIZED};

use super::file_io::{read_json, write_json_atomic};

/// Current persisted document version
const DOCUMENT_VERSION: u32 = 1;

fn default_version() -> u32 {
    DOCUMENT_VERSION
}

/// Serializable category document. Legacy files without a version tag load
/// as version 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryData {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub categories: Vec<CategoryRule>,
}

impl Default for CategoryData {
    fn default() -> Self {
        Self {
            version: DOCUMENT_VERSION,
            categories: Vec::new(),
        }
    }
}

/// Durable, ordered store of category rules
pub struct CategoryStore {
    path: PathBuf,
    rules: Vec<CategoryRule>,
}

impl CategoryStore {
    /// Load the store from disk; a missing file yields the default store
    /// containing only "Uncategorized"
    pub fn load(path: PathBuf) -> FindashResult<Self> {
        let data: CategoryData = read_json(&path)?;
        let mut rules = data.categories;

        // Invariant: "Uncategorized" exists at all times, leading the order
        if !rules.iter().any(|r| r.is_uncategorized()) {
            rules.insert(0, CategoryRule::uncategorized());
        }

        Ok(Self { path, rules })
    }

    /// All rules in store (precedence) order
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Look up a rule by exact name
    pub fn get(&self, name: &str) -> Option<&CategoryRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Whether a category with this exact name exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of categories, including "Uncategorized"
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// The store always holds at least "Uncategorized"
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Add a new empty category and flush
    ///
    /// Reports `Duplicate` (a non-fatal status) if the trimmed name is empty
    /// or already present; the store is left unchanged.
    pub fn add_category(&mut self, name: &str) -> FindashResult<()> {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return Err(FindashError::duplicate_category(name));
        }

        self.rules.push(CategoryRule::new(name));
        self.flush()
    }

    /// Append a keyword to a category and flush
    ///
    /// The keyword is trimmed first. Returns whether an insertion occurred:
    /// an empty keyword, a keyword already present in the list, or a target
    /// of "Uncategorized" is a no-op reporting `false`. A missing category
    /// is a `NotFound` error.
    pub fn add_keyword(&mut self, category: &str, keyword: &str) -> FindashResult<bool> {
        let keyword = keyword.trim();

        let rule = self
            .rules
            .iter_mut()
            .find(|r| r.name == category)
            .ok_or_else(|| FindashError::category_not_found(category))?;

        if keyword.is_empty()
            || rule.is_uncategorized()
            || rule.keywords.iter().any(|k| k == keyword)
        {
            return Ok(false);
        }

        rule.keywords.push(keyword.to_string());
        self.flush()?;
        Ok(true)
    }

    /// Remove the first exact match of a keyword from a category and flush
    pub fn remove_keyword(&mut self, category: &str, keyword: &str) -> FindashResult<()> {
        let rule = self
            .rules
            .iter_mut()
            .find(|r| r.name == category)
            .ok_or_else(|| FindashError::category_not_found(category))?;

        let position = rule
            .keywords
            .iter()
            .position(|k| k == keyword)
            .ok_or_else(|| FindashError::keyword_not_found(keyword))?;

        rule.keywords.remove(position);
        self.flush()
    }

    /// Delete a category and flush
    ///
    /// "Uncategorized" is never deletable. Budgets for a deleted category
    /// are left in place (stale entries are tolerated).
    pub fn remove_category(&mut self, name: &str) -> FindashResult<()> {
        if name == UNCATEGORIZED {
            return Err(FindashError::Validation(
                "The 'Uncategorized' category cannot be deleted".into(),
            ));
        }

        let position = self
            .rules
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| FindashError::category_not_found(name))?;

        self.rules.remove(position);
        self.flush()
    }

    /// Persist the current rule set atomically
    fn flush(&self) -> FindashResult<()> {
        let data = CategoryData {
            version: DOCUMENT_VERSION,
            categories: self.rules.clone(),
        };
        write_json_atomic(&self.path, &data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, CategoryStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        let store = CategoryStore::load(path).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_fresh_store_has_uncategorized() {
        let (_temp_dir, store) = create_test_store();
        assert_eq!(store.len(), 1);
        assert!(store.contains("Uncategorized"));
    }

    #[test]
    fn test_add_category() {
        let (_temp_dir, mut store) = create_test_store();

        store.add_category("Food").unwrap();
        assert!(store.contains("Food"));
        assert!(store.get("Food").unwrap().keywords.is_empty());
    }

    #[test]
    fn test_add_duplicate_category_is_status() {
        let (_temp_dir, mut store) = create_test_store();

        store.add_category("Food").unwrap();
        let err = store.add_category("Food").unwrap_err();
        assert!(matches!(err, FindashError::Duplicate { .. }));
        assert!(err.is_status());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_uncategorized_again_is_duplicate() {
        let (_temp_dir, mut store) = create_test_store();

        let err = store.add_category("Uncategorized").unwrap_err();
        assert!(matches!(err, FindashError::Duplicate { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_empty_name_is_duplicate_status() {
        let (_temp_dir, mut store) = create_test_store();

        assert!(store.add_category("   ").is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_keyword_trims_and_appends_in_order() {
        let (_temp_dir, mut store) = create_test_store();
        store.add_category("Food").unwrap();

        assert!(store.add_keyword("Food", "  coffee ").unwrap());
        assert!(store.add_keyword("Food", "bakery").unwrap());

        assert_eq!(store.get("Food").unwrap().keywords, vec!["coffee", "bakery"]);
    }

    #[test]
    fn test_add_keyword_idempotent() {
        let (_temp_dir, mut store) = create_test_store();
        store.add_category("Food").unwrap();

        assert!(store.add_keyword("Food", "coffee").unwrap());
        assert!(!store.add_keyword("Food", "coffee").unwrap());
        assert_eq!(store.get("Food").unwrap().keywords.len(), 1);
    }

    #[test]
    fn test_add_empty_keyword_is_noop() {
        let (_temp_dir, mut store) = create_test_store();
        store.add_category("Food").unwrap();

        assert!(!store.add_keyword("Food", "   ").unwrap());
        assert!(store.get("Food").unwrap().keywords.is_empty());
    }

    #[test]
    fn test_add_keyword_to_uncategorized_is_noop() {
        let (_temp_dir, mut store) = create_test_store();

        assert!(!store.add_keyword("Uncategorized", "anything").unwrap());
        assert!(store.get("Uncategorized").unwrap().keywords.is_empty());
    }

    #[test]
    fn test_add_keyword_missing_category() {
        let (_temp_dir, mut store) = create_test_store();

        let err = store.add_keyword("Nope", "coffee").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove_keyword() {
        let (_temp_dir, mut store) = create_test_store();
        store.add_category("Food").unwrap();
        store.add_keyword("Food", "coffee").unwrap();

        store.remove_keyword("Food", "coffee").unwrap();
        assert!(store.get("Food").unwrap().keywords.is_empty());

        let err = store.remove_keyword("Food", "coffee").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove_category() {
        let (_temp_dir, mut store) = create_test_store();
        store.add_category("Food").unwrap();

        store.remove_category("Food").unwrap();
        assert!(!store.contains("Food"));

        assert!(store.remove_category("Food").unwrap_err().is_not_found());
    }

    #[test]
    fn test_uncategorized_never_deletable() {
        let (_temp_dir, mut store) = create_test_store();

        let err = store.remove_category("Uncategorized").unwrap_err();
        assert!(matches!(err, FindashError::Validation(_)));
        assert!(store.contains("Uncategorized"));
    }

    #[test]
    fn test_mutations_flush_and_reload_preserves_order() {
        let (temp_dir, mut store) = create_test_store();
        store.add_category("Rent").unwrap();
        store.add_category("Food").unwrap();
        store.add_keyword("Food", "coffee").unwrap();

        let path = temp_dir.path().join("categories.json");
        let reloaded = CategoryStore::load(path).unwrap();

        let names: Vec<_> = reloaded.rules().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Uncategorized", "Rent", "Food"]);
        assert_eq!(reloaded.get("Food").unwrap().keywords, vec!["coffee"]);
    }

    #[test]
    fn test_loads_legacy_document_without_version_or_uncategorized() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        std::fs::write(
            &path,
            r#"{"categories":[{"name":"Food","keywords":["coffee"]}]}"#,
        )
        .unwrap();

        let store = CategoryStore::load(path).unwrap();
        let names: Vec<_> = store.rules().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Uncategorized", "Food"]);
    }

    #[test]
    fn test_flushed_document_carries_version() {
        let (temp_dir, mut store) = create_test_store();
        store.add_category("Food").unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("categories.json")).unwrap();
        let data: CategoryData = serde_json::from_str(&raw).unwrap();
        assert_eq!(data.version, 1);
    }
}
