//! Integrity verification operations

use super::{compute_internal_hash, MerkleTree};
use crate::hashing::compute_leaf_hash;
use crate::integrity::IntegrityReport;
use txproof_core::SENTINEL_DIGEST;

/// Recompute every digest of the tree and compare it to what is stored
pub fn verify_integrity_impl(tree: &MerkleTree) -> IntegrityReport {
    let mut mismatched_nodes = Vec::new();

    if let Some(leaf_level) = tree.levels.first() {
        for (position, stored) in leaf_level.iter().enumerate() {
            let expected = match tree.leaves.get(position) {
                Some(identifier) => compute_leaf_hash(identifier.as_bytes()),
                None => SENTINEL_DIGEST,
            };
            if expected != *stored {
                mismatched_nodes.push((0, position));
            }
        }
    }

    for (level, pair) in tree.levels.windows(2).enumerate() {
        let (children, parents) = (&pair[0], &pair[1]);
        for (position, stored) in parents.iter().enumerate() {
            let expected =
                compute_internal_hash(&children[2 * position], &children[2 * position + 1]);
            if expected != *stored {
                mismatched_nodes.push((level + 1, position));
            }
        }
    }

    IntegrityReport {
        total_leaves: tree.leaves.len() as u64,
        tree_valid: mismatched_nodes.is_empty(),
        mismatched_nodes,
        root_hash: tree.root(),
    }
}
