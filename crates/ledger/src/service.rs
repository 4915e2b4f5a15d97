//! Tree commits, proof generation and generic key access

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use txproof_config::LedgerConfig;
use txproof_core::{hash_to_hex, is_tree_key, serde_hex, tree_key, Error, Hash, Result, TreeId};
use txproof_merkle::{IntegrityReport, MerkleProof, MerkleTree, MerkleTreeState};
use txproof_storage::Store;

/// Record stored under `tree_<id>`
pub type StoredTree = MerkleTreeState;

/// Summary of a freshly committed tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedTree {
    pub tree_id: TreeId,
    #[serde(with = "serde_hex")]
    pub root: Hash,
    /// Identifiers in the batch
    pub leaf_count: usize,
    /// Leaves after padding to a power of two
    pub padded_leaf_count: usize,
}

impl CommittedTree {
    fn from_tree(tree: &MerkleTree) -> Self {
        Self {
            tree_id: tree.tree_id(),
            root: tree.root(),
            leaf_count: tree.leaf_count(),
            padded_leaf_count: tree.padded_leaf_count(),
        }
    }
}

/// Ledger of committed Merkle trees over a generic store
#[derive(Clone)]
pub struct MerkleLedger {
    store: Arc<dyn Store>,
}

impl MerkleLedger {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Open the store named by `config` and wrap it
    pub async fn from_config(config: &LedgerConfig) -> Result<Self> {
        Ok(Self::new(crate::setup::open_store(config).await?))
    }

    /// Underlying store
    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    /// Build a tree over `identifiers` and commit it under `tree_id`.
    ///
    /// The commit is a single create-if-absent write: an existing tree is
    /// never touched, and of several concurrent builds for one id exactly one
    /// succeeds.
    pub async fn build_merkle_tree<S: AsRef<str> + Sync>(
        &self,
        identifiers: &[S],
        tree_id: TreeId,
    ) -> Result<CommittedTree> {
        let tree = MerkleTree::build(tree_id, identifiers)?;
        let key = tree_key(tree_id);
        let record = serde_json::to_vec(&tree.export_state())
            .map_err(|e| Error::serialization(key.clone(), "encode tree", e))?;

        if !self.store.put_if_absent(&key, &record).await? {
            tracing::debug!(tree_id, "refusing to overwrite committed tree");
            return Err(Error::duplicate_tree(tree_id));
        }

        tracing::info!(
            tree_id,
            leaves = tree.leaf_count(),
            root = %hash_to_hex(&tree.root()),
            "committed Merkle tree"
        );
        Ok(CommittedTree::from_tree(&tree))
    }

    /// Inclusion proof for `identifier` in the committed tree `tree_id`
    pub async fn get_merkle_proof(&self, identifier: &str, tree_id: TreeId) -> Result<MerkleProof> {
        let tree = self.load_tree(tree_id).await?;
        let proof = tree.generate_proof(identifier)?;

        tracing::debug!(
            tree_id,
            index = proof.index,
            siblings = proof.siblings.len(),
            "generated inclusion proof"
        );
        Ok(proof)
    }

    /// Root of a committed tree, for publishing through another channel
    pub async fn root(&self, tree_id: TreeId) -> Result<Hash> {
        Ok(self.load_tree(tree_id).await?.root())
    }

    /// Full stored record of a committed tree
    pub async fn tree(&self, tree_id: TreeId) -> Result<StoredTree> {
        Ok(self.load_tree(tree_id).await?.export_state())
    }

    /// Recompute every node of a committed tree
    pub async fn check_integrity(&self, tree_id: TreeId) -> Result<IntegrityReport> {
        let report = self.load_tree(tree_id).await?.verify_integrity();
        if !report.tree_valid {
            tracing::warn!(
                tree_id,
                mismatches = report.mismatched_nodes.len(),
                "stored tree failed integrity check"
            );
        }
        Ok(report)
    }

    /// Raw value stored under `key`
    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.store.get(key).await
    }

    /// Store a generic value. Keys in the tree namespace are refused.
    pub async fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        if is_tree_key(key) {
            return Err(Error::ReservedKey {
                key: key.to_string(),
            });
        }
        self.store.put(key, value).await
    }

    async fn load_tree(&self, tree_id: TreeId) -> Result<MerkleTree> {
        let key = tree_key(tree_id);
        let record = self
            .store
            .get(&key)
            .await?
            .ok_or_else(|| Error::tree_not_found(tree_id))?;

        let state: StoredTree = serde_json::from_slice(&record)
            .map_err(|e| Error::corruption(key.clone(), format!("undecodable tree: {e}")))?;
        if state.tree_id != tree_id {
            return Err(Error::corruption(
                key,
                format!("record belongs to tree {}", state.tree_id),
            ));
        }

        MerkleTree::import_state(state)
    }
}
