#![allow(dead_code)]
//! Shared helpers for ledger integration tests

use async_trait::async_trait;
use std::io;
use std::sync::Arc;
use txproof_core::{Error, Result};
use txproof_ledger::MerkleLedger;
use txproof_storage::{MemoryStore, Store};

pub const SCENARIO: [&str; 3] = ["0xabc", "0xdef", "0x123"];
pub const SCENARIO_TREE: u64 = 14;

pub fn memory_ledger() -> MerkleLedger {
    MerkleLedger::new(Arc::new(MemoryStore::new()))
}

/// Store whose every operation fails as if its backend were down
pub struct UnavailableStore;

fn outage(key: &str, operation: &'static str) -> Error {
    Error::storage_unavailable(
        key,
        operation,
        io::Error::new(io::ErrorKind::ConnectionRefused, "backend offline"),
    )
}

#[async_trait]
impl Store for UnavailableStore {
    async fn put(&self, key: &str, _value: &[u8]) -> Result<()> {
        Err(outage(key, "put"))
    }

    async fn put_if_absent(&self, key: &str, _value: &[u8]) -> Result<bool> {
        Err(outage(key, "put_if_absent"))
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Err(outage(key, "get"))
    }
}
