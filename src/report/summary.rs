use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ledger::{by_month, months_back, BudgetGoals, Transaction};

use super::round1;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Income and expense totals for one calendar month of a trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    pub label: String,
    pub income: f64,
    pub expenses: f64,
}

/// One row of the spent-versus-budget comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category: String,
    pub spent: f64,
    pub budget: f64,
}

/// Pure aggregation over transaction slices. Every function is
/// deterministic and side-effect free; aggregates are derived on each
/// call, never stored.
pub struct SummaryService;

impl SummaryService {
    /// Sum of income amounts. Zero for empty input.
    pub fn total_income(transactions: &[Transaction]) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.is_income())
            .map(|txn| txn.amount)
            .sum()
    }

    /// Sum of expense amounts. Zero for empty input.
    pub fn total_expenses(transactions: &[Transaction]) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.is_expense())
            .map(|txn| txn.amount)
            .sum()
    }

    /// Expense amounts grouped by category. Categories with no
    /// expenses are absent; callers needing zero-fill union against
    /// the budget goal keys.
    pub fn expenses_by_category(transactions: &[Transaction]) -> BTreeMap<String, f64> {
        let mut categories = BTreeMap::new();
        for txn in transactions.iter().filter(|txn| txn.is_expense()) {
            *categories.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
        }
        categories
    }

    /// Totals for the `month_count` consecutive calendar months ending
    /// at `anchor`, oldest first. Labels are bare month names, so a
    /// window spanning a year boundary repeats labels.
    pub fn monthly_series(
        transactions: &[Transaction],
        month_count: u32,
        anchor: NaiveDate,
    ) -> Vec<MonthlyTotals> {
        (0..month_count)
            .rev()
            .map(|offset| {
                let reference = months_back(anchor, offset);
                let subset = by_month(transactions, reference);
                MonthlyTotals {
                    label: MONTH_NAMES[reference.month0() as usize].to_string(),
                    income: Self::total_income(&subset),
                    expenses: Self::total_expenses(&subset),
                }
            })
            .collect()
    }

    /// Union of spent and budgeted categories, sorted by spent
    /// descending (ties alphabetically). Goal-only categories report
    /// zero spend; unbudgeted categories report a zero budget.
    pub fn category_comparison(
        expenses: &BTreeMap<String, f64>,
        goals: &BudgetGoals,
    ) -> Vec<CategorySpend> {
        let mut rows: BTreeMap<&str, CategorySpend> = goals
            .iter()
            .map(|(category, budget)| {
                (
                    category,
                    CategorySpend {
                        category: category.to_string(),
                        spent: 0.0,
                        budget,
                    },
                )
            })
            .collect();
        for (category, spent) in expenses {
            rows.entry(category.as_str())
                .or_insert_with(|| CategorySpend {
                    category: category.clone(),
                    spent: 0.0,
                    budget: 0.0,
                })
                .spent = *spent;
        }
        let mut rows: Vec<CategorySpend> = rows.into_values().collect();
        rows.sort_by(|a, b| b.spent.partial_cmp(&a.spent).unwrap_or(Ordering::Equal));
        rows
    }

    /// Percentage of income not spent, one decimal. Zero income is an
    /// explicit zero, not a division.
    pub fn savings_rate(income: f64, expenses: f64) -> f64 {
        if income <= 0.0 {
            return 0.0;
        }
        round1((income - expenses) / income * 100.0)
    }

    /// Percentage of the total budget actually spent, one decimal.
    /// Zero budget is an explicit zero.
    pub fn budget_utilization(total_expenses: f64, total_budget: f64) -> f64 {
        if total_budget <= 0.0 {
            return 0.0;
        }
        round1(total_expenses / total_budget * 100.0)
    }
}
