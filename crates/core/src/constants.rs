/// Constants used throughout the txproof codebase
use crate::types::Hash;

// Storage keys
pub const TREE_KEY_PREFIX: &str = "tree_";

/// Width in bytes of every digest in a tree or proof
pub const DIGEST_LEN: usize = 32;

/// Digest used to pad a level up to a power of two.
///
/// No SHA-256 preimage of the all-zero digest is known, so it can never be
/// the digest of a real identifier.
pub const SENTINEL_DIGEST: Hash = [0u8; DIGEST_LEN];

// Environment variable names
pub const TXPROOF_CONFIG_VAR: &str = "TXPROOF_CONFIG";
pub const TXPROOF_STORE_VAR: &str = "TXPROOF_STORE";
pub const TXPROOF_DATA_DIR_VAR: &str = "TXPROOF_DATA_DIR";
pub const TXPROOF_LOG_VAR: &str = "TXPROOF_LOG";
pub const TXPROOF_COMPRESSION_VAR: &str = "TXPROOF_COMPRESSION";

// Operation tags carried by ledger transactions
pub const PUT_OPERATION: &str = "Put";
pub const BUILD_TREE_OPERATION: &str = "BuildMerkleTree";

// Value compression in the file store
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 3;

/// Values smaller than this are stored uncompressed
pub const DEFAULT_COMPRESSION_MIN_SIZE: usize = 1024;
