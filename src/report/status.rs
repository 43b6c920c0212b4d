use std::fmt;

use serde::{Deserialize, Serialize};

use super::round1;

/// Tier derived from the spent-to-budget ratio of one category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpendingStatus {
    Healthy,
    Warning,
    Danger,
}

impl fmt::Display for SpendingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpendingStatus::Healthy => "Healthy",
            SpendingStatus::Warning => "Warning",
            SpendingStatus::Danger => "Danger",
        };
        f.write_str(label)
    }
}

/// Stateless per-call budget classification, recomputed from current
/// totals on every query.
pub struct BudgetService;

impl BudgetService {
    /// Classifies spending against a budget: at most 50% is healthy,
    /// at most 80% a warning, beyond that danger. A zero budget
    /// classifies as danger outright, spend or no spend.
    pub fn spending_status(spent: f64, budget: f64) -> SpendingStatus {
        if budget <= 0.0 {
            return SpendingStatus::Danger;
        }
        let ratio = spent / budget * 100.0;
        if ratio <= 50.0 {
            SpendingStatus::Healthy
        } else if ratio <= 80.0 {
            SpendingStatus::Warning
        } else {
            SpendingStatus::Danger
        }
    }

    /// Budget left for the period; negative means overage.
    pub fn remaining(budget: f64, spent: f64) -> f64 {
        budget - spent
    }

    /// Spent-to-budget percentage, one decimal, zero for a zero budget.
    pub fn usage_percent(spent: f64, budget: f64) -> f64 {
        if budget <= 0.0 {
            return 0.0;
        }
        round1(spent / budget * 100.0)
    }
}
