//! The txproof ledger service
//!
//! [`MerkleLedger`] commits batches of identifiers as immutable Merkle trees
//! through a [`Store`](txproof_storage::Store), serves inclusion proofs for
//! them and feeds observed blocks through [`ingest`].

pub mod ingest;
pub mod service;
pub mod setup;

pub use ingest::{Block, IngestReport, Operation, Transaction};
pub use service::{CommittedTree, MerkleLedger, StoredTree};
pub use setup::open_store;
