//! Budget CLI commands
//!
//! Implements CLI commands for declaring and listing per-category budgets.

use clap::Subcommand;

use crate::display::format_budget_list;
use crate::error::FindashResult;
use crate::models::Money;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// List all declared budgets
    List,

    /// Set the budget for a category (e.g. "500" or "500.00")
    Set {
        /// Category name
        category: String,
        /// Budget amount; must be non-negative
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(storage: &mut Storage, cmd: BudgetCommands) -> FindashResult<()> {
    match cmd {
        BudgetCommands::List => {
            print!("{}", format_budget_list(storage.budgets.budgets()));
        }

        BudgetCommands::Set { category, amount } => {
            let parsed = match Money::parse(&amount) {
                Ok(parsed) => parsed,
                Err(_) => {
                    println!("Invalid amount: '{}'", amount);
                    return Ok(());
                }
            };

            match storage.budgets.set_and_flush(&category, parsed) {
                Ok(()) => println!("Budget for '{}' set to {}.", category, parsed),
                Err(e) if e.is_status() => println!("{}", e),
                Err(e) => return Err(e),
            }
        }
    }

    Ok(())
}
