//! Store selection from configuration

use std::sync::Arc;
use txproof_config::{CompressionSettings, LedgerConfig, StoreKind};
use txproof_core::Result;
use txproof_storage::{CompressionConfig, FileStore, MemoryStore, Store};

/// Open the store a configuration asks for
pub async fn open_store(config: &LedgerConfig) -> Result<Arc<dyn Store>> {
    match config.store {
        StoreKind::Memory => {
            tracing::debug!("Using in-memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreKind::File => {
            let store = FileStore::open(
                config.data_dir.join("store"),
                compression_config(&config.compression),
            )
            .await?;
            Ok(Arc::new(store))
        }
    }
}

fn compression_config(settings: &CompressionSettings) -> CompressionConfig {
    CompressionConfig {
        enabled: settings.enabled,
        level: settings.level,
        min_size: settings.min_size,
    }
}
