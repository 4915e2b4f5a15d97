use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod ingest;
pub mod proof;
pub mod store;
pub mod tree;

/// Encodings a proof can be printed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ProofFormat {
    /// `{"index": n, "siblings": ["<hex>", ...]}`
    #[default]
    Json,
    /// Binary form, hex encoded
    Hex,
    /// Binary form written as raw bytes
    Raw,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a Merkle tree over a batch of identifiers and commit it
    #[command(visible_alias = "b")]
    Build {
        /// Id to commit the tree under
        #[arg(long)]
        tree_id: u64,

        /// Read the identifiers from a JSON array in this file
        #[arg(long, value_name = "FILE", conflicts_with = "identifiers")]
        file: Option<PathBuf>,

        /// Identifiers in batch order
        #[arg(required_unless_present = "file")]
        identifiers: Vec<String>,
    },

    /// Produce an inclusion proof for an identifier in a committed tree
    #[command(visible_alias = "p")]
    Proof {
        identifier: String,

        tree_id: u64,

        #[arg(long, value_enum, default_value_t = ProofFormat::Json)]
        format: ProofFormat,

        /// Also verify the proof locally against this root
        #[arg(long, value_name = "HEX")]
        root: Option<String>,
    },

    /// Verify a proof offline against a published root
    #[command(visible_alias = "v")]
    Verify {
        identifier: String,

        /// Proof file in JSON, hex or raw binary form
        #[arg(long, value_name = "FILE")]
        proof: PathBuf,

        /// Root digest obtained through a trusted channel
        #[arg(long, value_name = "HEX")]
        root: String,
    },

    /// Print the value stored under a key
    Get { key: String },

    /// Store a value under a key outside the tree namespace
    Put { key: String, value: String },

    /// Print the root of a committed tree
    Root { tree_id: u64 },

    /// Recompute every node of a committed tree
    Check { tree_id: u64 },

    /// Feed block files through ingestion
    Ingest {
        /// JSON files, each holding one block
        #[arg(required = true, value_name = "BLOCK_JSON")]
        blocks: Vec<PathBuf>,
    },
}
