//! Offline proof verification
//!
//! Nothing here touches storage or the network: a verifier needs only the
//! identifier, the proof and a root obtained through some trusted channel.

use crate::proofs::MerkleProof;
use crate::tree::compute_root_from_proof;
use txproof_core::{hash_to_hex, Hash, Result};

/// Check that `identifier` is included under `root` according to `proof`.
///
/// Returns `Ok(false)` for a well-formed proof that does not lead to `root`;
/// errors are reserved for proofs that are structurally unusable.
pub fn verify_proof(identifier: &str, proof: &MerkleProof, root: &Hash) -> Result<bool> {
    let computed_root = compute_root_from_proof(identifier.as_bytes(), proof)?;
    let matches = computed_root == *root;

    tracing::debug!(
        computed = %hash_to_hex(&computed_root),
        expected = %hash_to_hex(root),
        matches,
        "verified inclusion proof"
    );

    Ok(matches)
}
