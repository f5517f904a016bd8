//! Category display formatting
//!
//! Formats the category -> keywords listing for terminal output.

use crate::models::CategoryRule;

/// Format categories with their keywords as an indented tree
pub fn format_category_tree(rules: &[CategoryRule]) -> String {
    if rules.is_empty() {
        return "No categories found.".to_string();
    }

    let mut output = String::new();

    for (i, rule) in rules.iter().enumerate() {
        output.push_str(&format!("{}\n", rule.name));

        if rule.keywords.is_empty() {
            output.push_str("  (no keywords assigned)\n");
        } else {
            for (j, keyword) in rule.keywords.iter().enumerate() {
                let is_last = j == rule.keywords.len() - 1;
                let prefix = if is_last { "└── " } else { "├── " };
                output.push_str(&format!("  {}{}\n", prefix, keyword));
            }
        }

        if i < rules.len() - 1 {
            output.push('\n');
        }
    }

    output
}
