//! Statement analysis command
//!
//! Runs the normalize -> categorize -> aggregate pipeline over an uploaded
//! statement export and prints the requested report views. A malformed
//! statement aborts the command with no partial output; nothing is retried.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::FindashResult;
use crate::reports::{BudgetOverviewReport, CreditReport, ExpenseReport};
use crate::services::{categorize, normalize_statement_file};
use crate::storage::Storage;

/// Which report views to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Category totals and monthly trend over debits
    Expenses,
    /// Budget vs actual comparison
    Budget,
    /// Credit summary and raw credit list
    Credits,
    /// Everything
    All,
}

/// Arguments for the analyze command
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to the statement export (CSV with Details, Amount, Date,
    /// Debit/Credit columns)
    pub file: PathBuf,

    /// Report to print
    #[arg(short, long, value_enum, default_value = "all")]
    pub report: ReportKind,
}

/// Handle the analyze command
pub fn handle_analyze_command(storage: &Storage, args: AnalyzeArgs) -> FindashResult<()> {
    let mut batch = normalize_statement_file(&args.file)?;
    categorize(&mut batch, &storage.categories);

    let show = |kind: ReportKind| args.report == kind || args.report == ReportKind::All;

    if show(ReportKind::Expenses) {
        print!("{}", ExpenseReport::generate(&batch).format_terminal());
        if args.report == ReportKind::All {
            println!();
        }
    }

    if show(ReportKind::Budget) {
        let report =
            BudgetOverviewReport::generate(&storage.categories, &storage.budgets, &batch);
        print!("{}", report.format_terminal());
        if args.report == ReportKind::All {
            println!();
        }
    }

    if show(ReportKind::Credits) {
        print!("{}", CreditReport::generate(&batch).format_terminal());
    }

    Ok(())
}
