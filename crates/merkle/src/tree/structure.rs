//! Level-by-level tree construction

use super::compute_internal_hash;
use crate::hashing::compute_leaf_hash;
use txproof_core::{Hash, SENTINEL_DIGEST};

/// Build every level of the tree, leaf level first and `[root]` last.
///
/// The leaf level is padded with [`SENTINEL_DIGEST`] up to the next power of
/// two so that every node at every level has a sibling.
pub fn build_levels<S: AsRef<str>>(identifiers: &[S]) -> Vec<Vec<Hash>> {
    let padded_len = identifiers.len().next_power_of_two();

    let mut current_level: Vec<Hash> = Vec::with_capacity(padded_len);
    current_level.extend(
        identifiers
            .iter()
            .map(|identifier| compute_leaf_hash(identifier.as_ref().as_bytes())),
    );
    current_level.resize(padded_len, SENTINEL_DIGEST);

    let mut levels = Vec::with_capacity(padded_len.trailing_zeros() as usize + 1);

    while current_level.len() > 1 {
        let next_level: Vec<Hash> = current_level
            .chunks_exact(2)
            .map(|pair| compute_internal_hash(&pair[0], &pair[1]))
            .collect();

        tracing::trace!(
            width = current_level.len(),
            "hashed level into {} nodes",
            next_level.len()
        );

        levels.push(current_level);
        current_level = next_level;
    }

    levels.push(current_level);
    levels
}
