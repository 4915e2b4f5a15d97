//! Block ingestion
//!
//! Each observed block is classified transaction by transaction. Data writes
//! (`Put`) make up the block's batch and are committed as one tree whose id is
//! the block number. Tree commits themselves are reported but never batched,
//! and anything unknown is skipped.

use crate::service::{CommittedTree, MerkleLedger};
use serde::{Deserialize, Serialize};
use txproof_core::{constants::BUILD_TREE_OPERATION, constants::PUT_OPERATION, Result, TreeId};

/// One transaction as seen by the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub tx_id: String,
    /// Operation tag
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// A committed block and its transactions in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub number: u64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Classification of a transaction by its operation tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Generic data write, eligible for the block's tree
    Put,
    /// A tree commit, with the tree id it names when that parses
    BuildMerkleTree { tree_id: Option<TreeId> },
    /// Any other tag
    Unrecognized(String),
}

impl Operation {
    pub fn classify(transaction: &Transaction) -> Self {
        match transaction.function.as_str() {
            PUT_OPERATION => Operation::Put,
            BUILD_TREE_OPERATION => Operation::BuildMerkleTree {
                tree_id: transaction
                    .args
                    .get(1)
                    .and_then(|arg| arg.trim().parse().ok()),
            },
            other => Operation::Unrecognized(other.to_string()),
        }
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, Operation::Put)
    }
}

/// Outcome of ingesting one block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    pub block: u64,
    /// Tree built from the block, if it had eligible entries
    pub committed: Option<CommittedTree>,
    /// Transactions that joined the batch
    pub eligible: usize,
    /// Tree ids named by tree-commit transactions (`None` if unparseable)
    pub tree_commits: Vec<Option<TreeId>>,
    /// Transactions with an unrecognized operation tag
    pub skipped: usize,
}

impl MerkleLedger {
    /// Classify a block's transactions and commit its eligible ones as a tree
    pub async fn ingest_block(&self, block: &Block) -> Result<IngestReport> {
        let mut batch = Vec::new();
        let mut tree_commits = Vec::new();
        let mut skipped = 0;

        for transaction in &block.transactions {
            match Operation::classify(transaction) {
                Operation::Put => batch.push(transaction.tx_id.as_str()),
                Operation::BuildMerkleTree { tree_id } => {
                    tracing::debug!(
                        block = block.number,
                        tx_id = %transaction.tx_id,
                        ?tree_id,
                        "observed tree commit"
                    );
                    tree_commits.push(tree_id);
                }
                Operation::Unrecognized(tag) => {
                    tracing::warn!(
                        block = block.number,
                        tx_id = %transaction.tx_id,
                        "skipping transaction with unrecognized operation '{}'",
                        tag
                    );
                    skipped += 1;
                }
            }
        }

        let committed = if batch.is_empty() {
            None
        } else {
            Some(self.build_merkle_tree(&batch, block.number).await?)
        };

        tracing::info!(
            block = block.number,
            eligible = batch.len(),
            tree_commits = tree_commits.len(),
            skipped,
            "ingested block"
        );

        Ok(IngestReport {
            block: block.number,
            committed,
            eligible: batch.len(),
            tree_commits,
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(tx_id: &str, function: &str, args: &[&str]) -> Transaction {
        Transaction {
            tx_id: tx_id.to_string(),
            function: function.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    #[test]
    fn classifies_operations() {
        assert_eq!(Operation::classify(&tx("a", "Put", &["k", "v"])), Operation::Put);
        assert_eq!(
            Operation::classify(&tx("b", "BuildMerkleTree", &["[\"a\"]", "14"])),
            Operation::BuildMerkleTree { tree_id: Some(14) }
        );
        assert_eq!(
            Operation::classify(&tx("c", "BuildMerkleTree", &["[]"])),
            Operation::BuildMerkleTree { tree_id: None }
        );
        assert_eq!(
            Operation::classify(&tx("d", "Log", &[])),
            Operation::Unrecognized("Log".to_string())
        );
    }

    #[test]
    fn only_puts_are_eligible() {
        assert!(Operation::Put.is_eligible());
        assert!(!Operation::BuildMerkleTree { tree_id: None }.is_eligible());
        assert!(!Operation::Unrecognized("put".to_string()).is_eligible());
    }

    #[test]
    fn block_json_shape() {
        let block: Block = serde_json::from_str(
            r#"{"number": 3, "transactions": [{"tx_id": "0xabc", "function": "Put"}]}"#,
        )
        .unwrap();
        assert_eq!(block.number, 3);
        assert!(block.transactions[0].args.is_empty());
    }
}
