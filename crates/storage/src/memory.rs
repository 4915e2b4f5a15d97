//! In-process store backed by a concurrent map

use crate::store::{validate_key, Store};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use txproof_core::Result;

/// Volatile store, suitable for tests and single-process use
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: DashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        validate_key(key)?;
        self.values.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn put_if_absent(&self, key: &str, value: &[u8]) -> Result<bool> {
        validate_key(key)?;
        match self.values.entry(key.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(value.to_vec());
                Ok(true)
            }
        }
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        Ok(self.values.get(key).map(|value| value.value().clone()))
    }

    async fn contains(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.values.contains_key(key))
    }
}
