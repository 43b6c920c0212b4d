use chrono::{Datelike, NaiveDate};

use super::transaction::Transaction;

/// Transactions whose date shares the reference's calendar year and
/// month. Day-of-month and time-of-day are ignored; relative order is
/// preserved.
pub fn by_month(transactions: &[Transaction], reference: NaiveDate) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| {
            txn.date.year() == reference.year() && txn.date.month() == reference.month()
        })
        .cloned()
        .collect()
}

/// Transactions falling in the given calendar year, order preserved.
pub fn by_year(transactions: &[Transaction], year: i32) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| txn.date.year() == year)
        .cloned()
        .collect()
}

/// Steps a date back by whole calendar months, clamping the day to the
/// target month's length.
pub fn months_back(anchor: NaiveDate, steps: u32) -> NaiveDate {
    shift_month(anchor, -(steps as i32))
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - chrono::Duration::days(1);
    last_current.day()
}
