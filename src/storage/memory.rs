use std::{collections::BTreeMap, sync::Mutex};

use crate::errors::TrackerError;

use super::{RecordStore, Result};

/// In-memory record store for tests and embedding. State dies with the
/// value; nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let records = self.lock()?;
        Ok(records.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut records = self.lock()?;
        records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let records = self.lock()?;
        Ok(records.keys().cloned().collect())
    }
}

impl MemoryStore {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.records
            .lock()
            .map_err(|_| TrackerError::Storage("record store mutex poisoned".into()))
    }
}
