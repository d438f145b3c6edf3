use std::collections::HashMap;

use super::store::{SnapshotError, SnapshotStore};

/// In-memory snapshot store.
///
/// Intended for tests and ephemeral sessions; nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct InMemorySnapshotStore {
    values: HashMap<String, String>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        Ok(self.values.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), SnapshotError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SnapshotError> {
        self.values.remove(key);
        Ok(())
    }
}
