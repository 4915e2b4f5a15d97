//! Merkle trees over batches of ledger identifiers
//!
//! A batch of identifiers (for example the transaction ids committed in one
//! block) is hashed into a binary SHA-256 Merkle tree. Any member can later be
//! proven with a logarithmic list of sibling digests, and the proof can be
//! checked offline against a root published through another channel.
//!
//! ## Tree policy
//!
//! - leaves are `SHA-256(identifier)`, internal nodes `SHA-256(left || right)`
//! - a batch whose size is not a power of two is padded with the all-zero
//!   sentinel digest
//! - proof indices are consumed least-significant bit first: a clear bit puts
//!   the sibling on the right, a set bit puts it on the left

pub mod hashing;
pub mod integrity;
pub mod proofs;
pub mod state;
pub mod tree;
pub mod verification;

// Re-export main types
pub use hashing::{compute_internal_hash, compute_leaf_hash};
pub use integrity::IntegrityReport;
pub use proofs::{MerkleProof, Proof};
pub use state::MerkleTreeState;
pub use tree::MerkleTree;
pub use verification::verify_proof;

// Test modules
#[cfg(test)]
mod tests;
#[cfg(test)]
mod tests_proptest;
