//! Shared domain types: digests, tree identifiers and their text forms

use crate::constants::{DIGEST_LEN, TREE_KEY_PREFIX};
use crate::errors::{Error, Result};

/// Cryptographic hash type (SHA-256)
pub type Hash = [u8; DIGEST_LEN];

/// Caller assigned identifier of one committed tree, e.g. a block height
pub type TreeId = u64;

/// Storage key under which a committed tree is persisted
#[must_use]
pub fn tree_key(tree_id: TreeId) -> String {
    format!("{TREE_KEY_PREFIX}{tree_id}")
}

/// Whether a key lives in the namespace reserved for committed trees
#[must_use]
pub fn is_tree_key(key: &str) -> bool {
    key.starts_with(TREE_KEY_PREFIX)
}

/// Convert a digest to lowercase hex for display and wire formats
#[must_use]
pub fn hash_to_hex(hash: &Hash) -> String {
    hex::encode(hash)
}

/// Parse a 64 character hex string into a digest
pub fn hex_to_hash(value: &str) -> Result<Hash> {
    let trimmed = value.trim().trim_start_matches("0x");
    if trimmed.len() != DIGEST_LEN * 2 {
        return Err(Error::invalid_digest(
            value,
            format!(
                "expected {} hex characters, got {}",
                DIGEST_LEN * 2,
                trimmed.len()
            ),
        ));
    }

    let mut hash = [0u8; DIGEST_LEN];
    hex::decode_to_slice(trimmed, &mut hash)
        .map_err(|e| Error::invalid_digest(value, e.to_string()))?;
    Ok(hash)
}

/// Serde adapters that encode digests as hex strings
pub mod serde_hex {
    use super::{hash_to_hex, hex_to_hash, Hash};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(hash: &Hash, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hash_to_hex(hash))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Hash, D::Error> {
        let text = String::deserialize(deserializer)?;
        hex_to_hash(&text).map_err(D::Error::custom)
    }

    /// Hex encoding for a sequence of digests, order preserved
    pub mod vec {
        use super::{hash_to_hex, hex_to_hash, Hash};
        use serde::{de::Error as _, ser::SerializeSeq, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(hashes: &[Hash], serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(hashes.len()))?;
            for hash in hashes {
                seq.serialize_element(&hash_to_hex(hash))?;
            }
            seq.end()
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Vec<Hash>, D::Error> {
            let texts = Vec::<String>::deserialize(deserializer)?;
            texts
                .iter()
                .map(|text| hex_to_hash(text).map_err(D::Error::custom))
                .collect()
        }
    }

    /// Hex encoding for a sequence of levels
    pub mod levels {
        use super::{hash_to_hex, hex_to_hash, Hash};
        use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

        pub fn serialize<S: Serializer>(
            levels: &[Vec<Hash>],
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            let encoded: Vec<Vec<String>> = levels
                .iter()
                .map(|level| level.iter().map(hash_to_hex).collect())
                .collect();
            encoded.serialize(serializer)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Vec<Vec<Hash>>, D::Error> {
            let texts = Vec::<Vec<String>>::deserialize(deserializer)?;
            texts
                .iter()
                .map(|level| {
                    level
                        .iter()
                        .map(|text| hex_to_hash(text).map_err(D::Error::custom))
                        .collect()
                })
                .collect()
        }
    }
}
