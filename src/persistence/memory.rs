//! In-memory storage backend

use std::collections::HashMap;

use super::{Storage, StorageError};

/// Map-backed storage. Optionally fails every call, to exercise the
/// "storage unavailable" paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    failing: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend on which every read and write fails
    pub fn unavailable() -> Self {
        Self {
            values: HashMap::new(),
            failing: true,
        }
    }

    /// Toggle failure mode
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    /// Raw stored value (bypasses failure mode)
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.failing {
            return Err(StorageError::Unavailable);
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing {
            return Err(StorageError::Unavailable);
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
