use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static DEFAULT_GOALS: Lazy<BTreeMap<String, f64>> = Lazy::new(|| {
    [
        ("Food", 500.0),
        ("Transport", 300.0),
        ("Bills", 1000.0),
        ("Entertainment", 200.0),
        ("Shopping", 400.0),
        ("Health", 200.0),
        ("Other", 300.0),
    ]
    .into_iter()
    .map(|(name, amount)| (name.to_string(), amount))
    .collect()
});

/// Per-category monthly spending targets.
///
/// A category missing from the set means "no budget defined" and is
/// treated as a zero budget wherever a ratio is computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetGoals(BTreeMap<String, f64>);

impl BudgetGoals {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in seven-category set seeded on first access.
    pub fn defaults() -> Self {
        Self(DEFAULT_GOALS.clone())
    }

    /// Upserts a category target. Non-finite or negative amounts
    /// coerce to 0.
    pub fn set(&mut self, category: impl Into<String>, amount: f64) {
        let amount = if amount.is_finite() && amount > 0.0 {
            amount
        } else {
            0.0
        };
        self.0.insert(category.into(), amount);
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.0.get(category).copied()
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, amount)| (name.as_str(), *amount))
    }
}
