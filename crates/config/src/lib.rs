//! Configuration for txproof
//!
//! Settings are layered: built-in defaults, then a JSON config file, then
//! `TXPROOF_*` environment variables, then command-line overrides.

pub mod config;
pub mod loader;


pub use config::{CompressionSettings, ConfigSource, LedgerConfig, LedgerConfigBuilder, StoreKind};
pub use loader::{ConfigLoader, FileConfig};
