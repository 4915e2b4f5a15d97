//! Main Merkle tree implementation and operations

mod proof_operations;
mod structure;
mod verification;

use super::{integrity::IntegrityReport, proofs::MerkleProof, state::MerkleTreeState};
use std::collections::HashMap;
use std::fmt;
use txproof_core::{hash_to_hex, tree_key, Error, Hash, Result, TreeId};

pub(crate) use crate::hashing::compute_internal_hash;
pub use proof_operations::{compute_proof_path, compute_root_from_proof};
use structure::build_levels;
use verification::verify_integrity_impl;

/// Immutable binary Merkle tree over one batch of identifiers
#[derive(Debug, Clone)]
pub struct MerkleTree {
    /// Caller assigned id of the batch
    pub(super) tree_id: TreeId,
    /// Original identifiers in batch order
    pub(super) leaves: Vec<String>,
    /// First position of each identifier among the original leaves
    pub(super) positions: HashMap<String, usize>,
    /// Digests per level, padded leaf level first and `[root]` last
    pub(super) levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Build a tree over an ordered, non-empty batch of identifiers
    pub fn build<S: AsRef<str>>(tree_id: TreeId, identifiers: &[S]) -> Result<Self> {
        if identifiers.is_empty() {
            return Err(Error::EmptyBatch);
        }

        let leaves: Vec<String> = identifiers
            .iter()
            .map(|identifier| identifier.as_ref().to_string())
            .collect();
        let levels = build_levels(&leaves);

        tracing::debug!(
            tree_id,
            leaves = leaves.len(),
            padded = levels[0].len(),
            "built Merkle tree"
        );

        Ok(Self {
            tree_id,
            positions: index_positions(&leaves),
            leaves,
            levels,
        })
    }

    /// Id this tree was built under
    #[must_use]
    pub const fn tree_id(&self) -> TreeId {
        self.tree_id
    }

    /// Root digest
    #[must_use]
    pub fn root(&self) -> Hash {
        // Construction and import both guarantee a single-node top level.
        self.levels[self.levels.len() - 1][0]
    }

    /// Original identifiers in batch order
    #[must_use]
    pub fn leaves(&self) -> &[String] {
        &self.leaves
    }

    /// All levels, padded leaf level first
    #[must_use]
    pub fn levels(&self) -> &[Vec<Hash>] {
        &self.levels
    }

    /// Number of original identifiers
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Number of leaves after padding to a power of two
    #[must_use]
    pub fn padded_leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels above the leaves, which is also every proof's length
    #[must_use]
    pub fn height(&self) -> usize {
        self.levels.len() - 1
    }

    /// Position of the first occurrence of `identifier` in the batch
    #[must_use]
    pub fn position(&self, identifier: &str) -> Option<usize> {
        self.positions.get(identifier).copied()
    }

    /// Generate an inclusion proof for one of the tree's identifiers
    pub fn generate_proof(&self, identifier: &str) -> Result<MerkleProof> {
        let index = self
            .position(identifier)
            .ok_or_else(|| Error::leaf_not_found(identifier, self.tree_id))?;

        Ok(MerkleProof {
            index: index as u64,
            siblings: compute_proof_path(&self.levels, index),
        })
    }

    /// Recompute every node and report any that disagree with what is stored
    #[must_use]
    pub fn verify_integrity(&self) -> IntegrityReport {
        verify_integrity_impl(self)
    }

    /// Export tree state for persistence
    #[must_use]
    pub fn export_state(&self) -> MerkleTreeState {
        MerkleTreeState {
            tree_id: self.tree_id,
            leaves: self.leaves.clone(),
            levels: self.levels.clone(),
            root: self.root(),
        }
    }

    /// Import tree state from persistence, checking its shape
    pub fn import_state(state: MerkleTreeState) -> Result<Self> {
        let key = tree_key(state.tree_id);
        let corrupt = |reason: String| Error::corruption(key.clone(), reason);

        if state.leaves.is_empty() {
            return Err(corrupt("tree has no leaves".to_string()));
        }

        let expected_width = state.leaves.len().next_power_of_two();
        let expected_levels = expected_width.trailing_zeros() as usize + 1;
        if state.levels.len() != expected_levels {
            return Err(corrupt(format!(
                "expected {expected_levels} levels for {} leaves, found {}",
                state.leaves.len(),
                state.levels.len()
            )));
        }

        for (depth, level) in state.levels.iter().enumerate() {
            let width = expected_width >> depth;
            if level.len() != width {
                return Err(corrupt(format!(
                    "level {depth} has {} nodes, expected {width}",
                    level.len()
                )));
            }
        }

        if state.levels[expected_levels - 1][0] != state.root {
            return Err(corrupt("root does not match the top level".to_string()));
        }

        Ok(Self {
            tree_id: state.tree_id,
            positions: index_positions(&state.leaves),
            leaves: state.leaves,
            levels: state.levels,
        })
    }
}

fn index_positions(leaves: &[String]) -> HashMap<String, usize> {
    let mut positions = HashMap::with_capacity(leaves.len());
    for (position, identifier) in leaves.iter().enumerate() {
        positions.entry(identifier.clone()).or_insert(position);
    }
    positions
}

impl fmt::Display for MerkleTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MerkleTree {{ id: {}, leaves: {}, height: {}, root: {} }}",
            self.tree_id,
            self.leaf_count(),
            self.height(),
            hash_to_hex(&self.root())
        )
    }
}
