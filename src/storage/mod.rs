pub mod json_backend;
pub mod memory;
pub mod repository;

use crate::errors::TrackerError;

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Logical key of the persisted transactions document.
pub const TRANSACTIONS_KEY: &str = "finex_transactions";
/// Logical key of the persisted budget goals document.
pub const BUDGET_GOALS_KEY: &str = "finex_budget_goals";

/// Abstraction over persistence backends holding one JSON document per
/// logical key. A missing key reads as `None`, not an error.
pub trait RecordStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Result<()>;
    fn keys(&self) -> Result<Vec<String>>;
}

pub use json_backend::JsonStore;
pub use memory::MemoryStore;
pub use repository::{FailurePolicy, Repository};
