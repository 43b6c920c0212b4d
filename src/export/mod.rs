use std::{fs::File, io::Write, path::Path};

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

use crate::errors::TrackerError;
use crate::ledger::Transaction;
use crate::storage::Result;

const HEADER: &str = "Date,Type,Category,Description,Amount";

/// Writes the transaction sequence as CSV: a plain header row, then
/// one fully quoted row per transaction with a short date ("Mar 5,
/// 2024") and a capitalized kind. Returns the number of data rows.
///
/// An empty sequence refuses with `InvalidInput` and writes nothing,
/// so callers can surface a notice instead of producing an empty file.
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    mut writer: W,
) -> Result<usize> {
    if transactions.is_empty() {
        return Err(TrackerError::InvalidInput(
            "no transactions to export".into(),
        ));
    }
    writeln!(writer, "{}", HEADER)?;
    let mut rows = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);
    for txn in transactions {
        rows.write_record(&[
            format_short_date(txn.date.date()),
            txn.kind.to_string(),
            txn.category.clone(),
            txn.description.clone(),
            txn.amount.to_string(),
        ])?;
    }
    rows.flush()?;
    Ok(transactions.len())
}

/// Convenience wrapper that creates the target file first.
pub fn export_transactions_to_path(transactions: &[Transaction], path: &Path) -> Result<usize> {
    if transactions.is_empty() {
        return Err(TrackerError::InvalidInput(
            "no transactions to export".into(),
        ));
    }
    let file = File::create(path)?;
    export_transactions_csv(transactions, file)
}

fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
