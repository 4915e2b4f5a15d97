//! The storage collaborator contract

use async_trait::async_trait;
use std::sync::Arc;
use txproof_core::{Error, Result};

/// Generic keyed persistence consumed by the ledger.
///
/// Implementations surface their own failures as
/// [`Error::StorageUnavailable`] and never retry internally.
#[async_trait]
pub trait Store: Send + Sync {
    /// Store `value` under `key`, replacing any previous value
    async fn put(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Store `value` under `key` only if the key is unused.
    ///
    /// The check and the write are one atomic step: of several concurrent
    /// callers on the same key exactly one observes `true`, and readers see
    /// either nothing or the complete value.
    async fn put_if_absent(&self, key: &str, value: &[u8]) -> Result<bool>;

    /// Fetch the value stored under `key`, `None` if absent
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Whether a value is stored under `key`
    async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

#[async_trait]
impl<S: Store + ?Sized> Store for Arc<S> {
    async fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).put(key, value).await
    }

    async fn put_if_absent(&self, key: &str, value: &[u8]) -> Result<bool> {
        (**self).put_if_absent(key, value).await
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key).await
    }

    async fn contains(&self, key: &str) -> Result<bool> {
        (**self).contains(key).await
    }
}

/// Reject keys no store can hold
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::InvalidKey {
            key: key.to_string(),
            reason: "key must not be empty".to_string(),
        });
    }
    Ok(())
}
