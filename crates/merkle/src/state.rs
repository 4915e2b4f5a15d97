//! Persisted form of a committed tree

use serde::{Deserialize, Serialize};
use txproof_core::{serde_hex, Hash, TreeId};

/// Serializable tree state: the original identifiers, every level and the root.
///
/// This is the record stored under `tree_<id>` and returned verbatim by a
/// generic `get` of that key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleTreeState {
    /// Caller assigned tree id
    pub tree_id: TreeId,
    /// Original identifiers in batch order, before padding
    pub leaves: Vec<String>,
    /// Digests per level, padded leaf level first and `[root]` last
    #[serde(with = "serde_hex::levels")]
    pub levels: Vec<Vec<Hash>>,
    /// Root digest
    #[serde(with = "serde_hex")]
    pub root: Hash,
}
