//! Statement normalizer
//!
//! Parses an uploaded tabular statement export into canonical transactions.
//! The whole batch is rejected on a missing required column or an uncoercible
//! field; there are no partial results. Unparseable dates are the one
//! exception: they become `None` and the record is kept, because
//! date-dependent aggregations can simply skip it.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{FindashError, FindashResult};
use crate::models::{CategorizedBatch, Direction, Money, Transaction};

/// Required statement columns, matched after trimming header whitespace
const COLUMN_DETAILS: &str = "Details";
const COLUMN_AMOUNT: &str = "Amount";
const COLUMN_DATE: &str = "Date";
const COLUMN_DIRECTION: &str = "Debit/Credit";

/// Day-first formats tried in order, with an ISO fallback
const DATE_FORMATS: &[&str] = &["%d-%m-%Y", "%d/%m/%Y", "%d-%m-%y", "%d/%m/%y", "%Y-%m-%d"];

/// Normalize a statement export read from any reader
///
/// Every produced transaction starts with `category = "Uncategorized"`.
/// The same input bytes always yield the same transaction sequence.
pub fn normalize_statement<R: Read>(reader: R) -> FindashResult<CategorizedBatch> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| FindashError::Format(format!("could not read header row: {}", e)))?;

    // Column names are trimmed of surrounding whitespace before lookup
    let columns: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_string(), idx))
        .collect();

    let details_idx = require_column(&columns, COLUMN_DETAILS)?;
    let amount_idx = require_column(&columns, COLUMN_AMOUNT)?;
    let date_idx = require_column(&columns, COLUMN_DATE)?;
    let direction_idx = require_column(&columns, COLUMN_DIRECTION)?;

    let mut transactions = Vec::new();

    for (row, result) in csv_reader.records().enumerate() {
        let record =
            result.map_err(|e| FindashError::Format(format!("row {}: {}", row + 1, e)))?;

        let details = record.get(details_idx).unwrap_or("").to_string();

        let amount = parse_amount(record.get(amount_idx).unwrap_or(""))
            .map_err(|e| FindashError::Format(format!("row {}: {}", row + 1, e)))?;

        let date = parse_date_day_first(record.get(date_idx).unwrap_or(""));

        let raw_direction = record.get(direction_idx).unwrap_or("");
        let direction = Direction::parse(raw_direction).ok_or_else(|| {
            FindashError::Format(format!(
                "row {}: unrecognized Debit/Credit value '{}'",
                row + 1,
                raw_direction.trim()
            ))
        })?;

        transactions.push(Transaction::new(details, amount, date, direction));
    }

    Ok(CategorizedBatch::new(transactions))
}

/// Normalize a statement export from a file on disk
pub fn normalize_statement_file<P: AsRef<Path>>(path: P) -> FindashResult<CategorizedBatch> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| FindashError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    normalize_statement(file)
}

fn require_column(columns: &HashMap<String, usize>, name: &str) -> FindashResult<usize> {
    columns
        .get(name)
        .copied()
        .ok_or_else(|| FindashError::Format(format!("missing required column '{}'", name)))
}

/// Parse an amount field: thousands separators are stripped, then the rest
/// must be a plain decimal number
fn parse_amount(raw: &str) -> FindashResult<Money> {
    let stripped = raw.replace(',', "");
    Money::parse(stripped.trim()).map_err(|_| FindashError::Parse {
        field: "Amount",
        value: raw.to_string(),
    })
}

/// Parse a day-first calendar date, yielding None when no format matches
fn parse_date_day_first(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}
