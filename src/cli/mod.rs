//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the engine. It is the stand-in for the
//! excluded dashboard UI: it issues user commands against the stores and
//! renders the engine's outputs as text.

pub mod analyze;
pub mod budget;
pub mod category;

pub use analyze::{handle_analyze_command, AnalyzeArgs};
pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
