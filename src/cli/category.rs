//! Category CLI commands
//!
//! Implements CLI commands for category and keyword management. Store
//! mutation failures (duplicates, not-found, validation refusals) are
//! printed as statuses rather than aborting the process; prior state stays
//! intact either way.

use clap::Subcommand;

use crate::display::format_category_tree;
use crate::error::FindashResult;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with their keywords
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
    },

    /// Append a keyword to a category's matching rules
    #[command(name = "add-keyword")]
    AddKeyword {
        /// Category name
        category: String,
        /// Keyword (matched as a case-insensitive substring of details)
        keyword: String,
    },

    /// Remove a keyword from a category
    #[command(name = "remove-keyword")]
    RemoveKeyword {
        /// Category name
        category: String,
        /// Keyword to remove (first exact match)
        keyword: String,
    },

    /// Delete a category ("Uncategorized" cannot be deleted)
    Remove {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &mut Storage, cmd: CategoryCommands) -> FindashResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_tree(storage.categories.rules()));
        }

        CategoryCommands::Add { name } => match storage.categories.add_category(&name) {
            Ok(()) => println!("Category '{}' added.", name.trim()),
            Err(e) if e.is_status() => println!("{}", e),
            Err(e) => return Err(e),
        },

        CategoryCommands::AddKeyword { category, keyword } => {
            match storage.categories.add_keyword(&category, &keyword) {
                Ok(true) => println!("Keyword '{}' added to '{}'.", keyword.trim(), category),
                Ok(false) => println!("Keyword already exists or is invalid."),
                Err(e) if e.is_status() => println!("{}", e),
                Err(e) => return Err(e),
            }
        }

        CategoryCommands::RemoveKeyword { category, keyword } => {
            match storage.categories.remove_keyword(&category, &keyword) {
                Ok(()) => println!("Keyword '{}' removed from '{}'.", keyword, category),
                Err(e) if e.is_status() => println!("{}", e),
                Err(e) => return Err(e),
            }
        }

        CategoryCommands::Remove { name } => match storage.categories.remove_category(&name) {
            Ok(()) => println!("Category '{}' removed.", name),
            Err(e) if e.is_status() => println!("{}", e),
            Err(e) => return Err(e),
        },
    }

    Ok(())
}
