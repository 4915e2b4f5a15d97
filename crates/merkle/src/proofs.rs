//! Inclusion proofs and their wire encodings
//!
//! A proof travels either as JSON (`{"index": 1, "siblings": ["<hex>", ...]}`)
//! or as raw bytes: the index as a little-endian `u64`, the sibling count as a
//! little-endian `u32`, then 32 bytes per sibling. Both encodings keep the
//! siblings in leaf-to-root order.

use serde::{Deserialize, Serialize};
use txproof_core::{serde_hex, Error, Hash, Result, DIGEST_LEN};

const INDEX_LEN: usize = 8;
const COUNT_LEN: usize = 4;

/// Merkle proof for verifying that one identifier belongs to one tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// Position of the leaf among the original identifiers, consumed LSB first
    pub index: u64,
    /// Sibling digests from the leaf level up to, but excluding, the root
    #[serde(with = "serde_hex::vec")]
    pub siblings: Vec<Hash>,
}

/// Shorter name used across the workspace
pub type Proof = MerkleProof;

impl MerkleProof {
    /// Number of levels between the leaf and the root
    #[must_use]
    pub fn height(&self) -> usize {
        self.siblings.len()
    }

    /// Encode as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::serialization("proof", "encode JSON", e))
    }

    /// Decode the JSON wire form
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::malformed_proof(e.to_string()))
    }

    /// Encode the raw binary wire form
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes =
            Vec::with_capacity(INDEX_LEN + COUNT_LEN + self.siblings.len() * DIGEST_LEN);
        bytes.extend_from_slice(&self.index.to_le_bytes());
        bytes.extend_from_slice(&(self.siblings.len() as u32).to_le_bytes());
        for sibling in &self.siblings {
            bytes.extend_from_slice(sibling);
        }
        bytes
    }

    /// Decode the raw binary wire form
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < INDEX_LEN + COUNT_LEN {
            return Err(Error::malformed_proof(format!(
                "proof header needs {} bytes, got {}",
                INDEX_LEN + COUNT_LEN,
                bytes.len()
            )));
        }

        let (index_bytes, rest) = bytes.split_at(INDEX_LEN);
        let (count_bytes, body) = rest.split_at(COUNT_LEN);
        let mut index = [0u8; INDEX_LEN];
        index.copy_from_slice(index_bytes);
        let mut count = [0u8; COUNT_LEN];
        count.copy_from_slice(count_bytes);
        let count = u32::from_le_bytes(count) as usize;

        if body.len() % DIGEST_LEN != 0 || body.len() / DIGEST_LEN != count {
            return Err(Error::malformed_proof(format!(
                "expected {count} siblings of {DIGEST_LEN} bytes, got {} trailing bytes",
                body.len()
            )));
        }

        let siblings = body
            .chunks_exact(DIGEST_LEN)
            .map(|chunk| {
                let mut hash = [0u8; DIGEST_LEN];
                hash.copy_from_slice(chunk);
                hash
            })
            .collect();

        Ok(Self {
            index: u64::from_le_bytes(index),
            siblings,
        })
    }
}
