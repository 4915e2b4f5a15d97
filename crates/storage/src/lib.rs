//! Keyed persistence for txproof
//!
//! The ledger persists trees and generic values through the [`Store`]
//! contract. Two implementations are provided:
//!
//! - [`MemoryStore`]: a concurrent in-process map
//! - [`FileStore`]: one checksummed, optionally zstd-compressed file per key,
//!   published atomically

mod compression;
pub mod file;
mod format;
mod memory;
mod store;
mod tests;

pub use compression::CompressionConfig;
pub use file::FileStore;
pub use format::{StorageHeader, STORAGE_VERSION, STORE_MAGIC};
pub use memory::MemoryStore;
pub use store::{validate_key, Store};
