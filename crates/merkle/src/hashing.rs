//! Hash computation functions for the Merkle tree

use sha2::{Digest, Sha256};
use txproof_core::Hash;

/// Compute the digest of one original identifier
pub fn compute_leaf_hash(identifier: &[u8]) -> Hash {
    Sha256::digest(identifier).into()
}

/// Compute the digest of an internal node, left operand first
pub fn compute_internal_hash(left_hash: &Hash, right_hash: &Hash) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(left_hash);
    hasher.update(right_hash);
    hasher.finalize().into()
}
