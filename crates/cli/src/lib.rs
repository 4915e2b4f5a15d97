//! The `txproof` command line
//!
//! Parsing lives here so the binary stays a thin wrapper and commands can be
//! exercised against an in-memory ledger in tests.

pub mod commands;
pub mod execute;
pub mod logging;

use clap::Parser;
use std::path::PathBuf;
use txproof_config::{ConfigLoader, StoreKind};

pub use commands::{Commands, ProofFormat};

#[derive(Parser, Debug)]
#[command(name = "txproof")]
#[command(about = "Commit identifier batches as Merkle trees and prove membership offline")]
#[command(version)]
pub struct Cli {
    /// Store backing the ledger (memory or file)
    #[arg(long, global = true, value_parser = parse_store_kind)]
    pub store: Option<StoreKind>,

    /// Directory holding the file store and config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log filter directive, e.g. debug or txproof_merkle=debug
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Config file to read instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration loader carrying this invocation's overrides
    pub fn config_loader(&self) -> ConfigLoader {
        let loader = ConfigLoader::new()
            .store(self.store)
            .data_dir(self.data_dir.clone())
            .log_level(self.log_level.clone());

        match &self.config {
            Some(path) => loader.config_file(path),
            None => loader,
        }
    }
}

fn parse_store_kind(value: &str) -> Result<StoreKind, String> {
    value.parse().map_err(|e: txproof_core::Error| e.to_string())
}
