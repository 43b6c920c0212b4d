use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};

use crate::errors::TrackerError;
use crate::ledger::{BudgetGoals, Transaction};

use super::{RecordStore, Result, BUDGET_GOALS_KEY, TRANSACTIONS_KEY};

/// How storage failures surface from repository operations.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log and degrade: reads fall back to empty/default state,
    /// mutations return an empty result instead of the updated one.
    #[default]
    FailSoft,
    /// Propagate the underlying storage error to the caller.
    FailLoud,
}

/// Typed access over a [`RecordStore`].
///
/// Every mutation re-reads the full document, applies the change in
/// memory, and writes the whole document back. There is no partial
/// update protocol and no write coordination; callers are expected to
/// issue operations one at a time from a single session.
pub struct Repository<S: RecordStore> {
    store: S,
    policy: FailurePolicy,
}

impl<S: RecordStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self::with_policy(store, FailurePolicy::default())
    }

    pub fn with_policy(store: S, policy: FailurePolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// All stored transactions in insertion order. A missing document,
    /// malformed JSON, or an unreadable store degrades to empty under
    /// fail-soft.
    pub fn list_transactions(&self) -> Result<Vec<Transaction>> {
        match self.read_transactions() {
            Ok(rows) => Ok(rows),
            Err(err) => self.degrade_read("transactions", err, Vec::new()),
        }
    }

    /// Validates, appends, persists, and returns the full updated
    /// collection. A persistence failure under fail-soft returns an
    /// empty vec — the caller must read that as "the write may not
    /// have stuck", not as "the collection is now empty".
    pub fn add_transaction(&self, mut txn: Transaction) -> Result<Vec<Transaction>> {
        if !txn.amount.is_finite() || txn.amount <= 0.0 {
            return Err(TrackerError::InvalidInput(
                "transaction amount must be a positive number".into(),
            ));
        }
        if txn.description.trim().is_empty() {
            return Err(TrackerError::InvalidInput(
                "transaction description must not be empty".into(),
            ));
        }
        let mut rows = self.list_transactions()?;
        while rows.iter().any(|existing| existing.id == txn.id) {
            txn.id += 1;
        }
        rows.push(txn);
        match self.persist(TRANSACTIONS_KEY, &rows) {
            Ok(()) => Ok(rows),
            Err(err) => self.degrade_write("transactions", err, Vec::new()),
        }
    }

    /// Removes the transaction with the matching id; absence is a
    /// no-op, not an error. Returns the updated collection.
    pub fn delete_transaction(&self, id: i64) -> Result<Vec<Transaction>> {
        let mut rows = self.list_transactions()?;
        rows.retain(|txn| txn.id != id);
        match self.persist(TRANSACTIONS_KEY, &rows) {
            Ok(()) => Ok(rows),
            Err(err) => self.degrade_write("transactions", err, Vec::new()),
        }
    }

    /// Stored goals, or the built-in default set when nothing is
    /// stored or the document is unreadable.
    pub fn budget_goals(&self) -> Result<BudgetGoals> {
        match self.read_goals() {
            Ok(goals) => Ok(goals),
            Err(err) => self.degrade_read("budget goals", err, BudgetGoals::defaults()),
        }
    }

    /// Upserts one category target (invalid amounts coerce to zero),
    /// persists, and returns the full updated set. Empty mapping on a
    /// persistence failure under fail-soft.
    pub fn update_budget_goal(&self, category: &str, amount: f64) -> Result<BudgetGoals> {
        let mut goals = self.budget_goals()?;
        goals.set(category, amount);
        match self.persist(BUDGET_GOALS_KEY, &goals) {
            Ok(()) => Ok(goals),
            Err(err) => self.degrade_write("budget goals", err, BudgetGoals::new()),
        }
    }

    fn read_transactions(&self) -> Result<Vec<Transaction>> {
        let raw = match self.store.get(TRANSACTIONS_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };
        decode_transactions(&raw)
    }

    fn read_goals(&self) -> Result<BudgetGoals> {
        match self.store.get(BUDGET_GOALS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(BudgetGoals::defaults()),
        }
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.store.put(key, &json)
    }

    fn degrade_read<T>(&self, what: &str, err: TrackerError, fallback: T) -> Result<T> {
        match self.policy {
            FailurePolicy::FailSoft => {
                warn!("failed to read {what}, degrading to default: {err}");
                Ok(fallback)
            }
            FailurePolicy::FailLoud => Err(err),
        }
    }

    fn degrade_write<T>(&self, what: &str, err: TrackerError, fallback: T) -> Result<T> {
        match self.policy {
            FailurePolicy::FailSoft => {
                error!("failed to persist {what}: {err}");
                Ok(fallback)
            }
            FailurePolicy::FailLoud => Err(err),
        }
    }
}

/// Decodes the transactions document record by record so a single
/// malformed entry (bad date, wrong shape) is skipped with a warning
/// instead of poisoning the whole collection.
fn decode_transactions(raw: &str) -> Result<Vec<Transaction>> {
    let records: Vec<Value> = serde_json::from_str(raw)?;
    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        match serde_json::from_value::<Transaction>(record) {
            Ok(txn) => rows.push(txn),
            Err(err) => warn!("skipping undecodable transaction record: {err}"),
        }
    }
    Ok(rows)
}
