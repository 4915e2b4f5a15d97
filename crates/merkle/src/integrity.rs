//! Integrity verification and reporting for the Merkle tree

use serde::{Deserialize, Serialize};
use txproof_core::Hash;

/// Tree integrity verification report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityReport {
    /// Number of original leaves checked
    pub total_leaves: u64,
    /// Nodes whose stored digest disagrees with their recomputed digest,
    /// as `(level, position)`
    pub mismatched_nodes: Vec<(usize, usize)>,
    /// Root digest as stored
    pub root_hash: Hash,
    /// Whether the entire tree is valid
    pub tree_valid: bool,
}
