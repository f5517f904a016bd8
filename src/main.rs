use anyhow::Result;
use clap::{Parser, Subcommand};

use findash::cli::{
    handle_analyze_command, handle_budget_command, handle_category_command, AnalyzeArgs,
    BudgetCommands, CategoryCommands,
};
use findash::config::FindashPaths;
use findash::storage::Storage;

#[derive(Parser)]
#[command(
    name = "findash",
    author = "Kaylee Beyene",
    version,
    about = "Categorize bank-statement exports and reconcile them against budgets",
    long_about = "findash is the engine behind a personal finance dashboard: it \
                  normalizes bank-statement exports, classifies transactions with \
                  user-defined keyword rules, and reconciles categorized spending \
                  against declared budgets."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Category and keyword rule management
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Analyze a statement export and print report views
    Analyze(AnalyzeArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FindashPaths::new()?;
    let mut storage = Storage::open(&paths)?;

    match cli.command {
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut storage, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut storage, cmd)?;
        }
        Some(Commands::Analyze(args)) => {
            handle_analyze_command(&storage, args)?;
        }
        Some(Commands::Config) => {
            println!("findash Configuration");
            println!("=====================");
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Categories file: {}", paths.categories_file().display());
            println!("Budgets file:    {}", paths.budgets_file().display());
        }
        None => {
            println!("findash - statement categorization and budget reconciliation");
            println!();
            println!("Run 'findash --help' for usage information.");
            println!("Run 'findash analyze <statement.csv>' to review a statement.");
        }
    }

    Ok(())
}
