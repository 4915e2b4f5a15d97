//! Proof generation and root recomputation

use super::compute_internal_hash;
use crate::hashing::compute_leaf_hash;
use crate::proofs::Proof;
use txproof_core::{Error, Hash, Result};

/// Collect the sibling of `index` at every level below the root
pub fn compute_proof_path(levels: &[Vec<Hash>], index: usize) -> Vec<Hash> {
    let height = levels.len().saturating_sub(1);
    let mut siblings = Vec::with_capacity(height);
    let mut idx = index;

    for level in &levels[..height] {
        // Even nodes pair with their right neighbour, odd nodes with their left.
        let sibling = if idx & 1 == 0 { idx + 1 } else { idx - 1 };
        siblings.push(level[sibling]);
        idx >>= 1;
    }

    siblings
}

/// Recompute the root a proof commits to for the given identifier.
///
/// Fails only when the proof is structurally unusable; whether the computed
/// root is the expected one is up to the caller.
pub fn compute_root_from_proof(identifier: &[u8], proof: &Proof) -> Result<Hash> {
    let height = proof.siblings.len();
    if height < u64::BITS as usize && proof.index >> height != 0 {
        return Err(Error::malformed_proof(format!(
            "index {} does not address a leaf of a tree with {} levels",
            proof.index, height
        )));
    }

    let mut current_hash = compute_leaf_hash(identifier);
    let mut index = proof.index;

    for (level, sibling) in proof.siblings.iter().enumerate() {
        current_hash = if index & 1 == 0 {
            tracing::debug!(level, "sibling on right");
            compute_internal_hash(&current_hash, sibling)
        } else {
            tracing::debug!(level, "sibling on left");
            compute_internal_hash(sibling, &current_hash)
        };
        index >>= 1;
    }

    Ok(current_hash)
}
