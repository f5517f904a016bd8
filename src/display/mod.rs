//! Display formatting for terminal output
//!
//! Formats store listings for the CLI; the report views carry their own
//! `format_terminal` methods.

pub mod budget;
pub mod category;

pub use budget::format_budget_list;
pub use category::format_category_tree;
