use crate::types::TreeId;
use std::time::Duration;

/// Result type alias for txproof operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for txproof operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A tree was requested for a batch with no identifiers
    #[error("cannot build a Merkle tree from an empty batch")]
    EmptyBatch,

    /// A tree with this id has already been committed
    #[error("Merkle tree {tree_id} already exists")]
    DuplicateTreeId { tree_id: TreeId },

    /// No tree has been committed under this id
    #[error("Merkle tree {tree_id} not found")]
    TreeNotFound { tree_id: TreeId },

    /// The identifier is not one of the tree's original leaves
    #[error("identifier '{identifier}' is not a leaf of Merkle tree {tree_id}")]
    LeafNotFound { identifier: String, tree_id: TreeId },

    /// A proof is structurally unusable
    #[error("malformed proof: {reason}")]
    MalformedProof { reason: String },

    /// A caller supplied digest could not be parsed
    #[error("invalid digest '{value}': {reason}")]
    InvalidDigest { value: String, reason: String },

    /// The storage collaborator failed
    #[error("storage unavailable during {operation} on '{key}': {source}")]
    StorageUnavailable {
        key: String,
        operation: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Stored bytes failed checksum or structural validation
    #[error("stored value '{key}' is corrupt: {reason}")]
    Corruption { key: String, reason: String },

    /// Generic writes may not touch committed trees
    #[error("key '{key}' is reserved for committed Merkle trees")]
    ReservedKey { key: String },

    /// The key cannot be used with the store
    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    /// Encoding or decoding of a record failed
    #[error("failed to {operation} '{key}': {source}")]
    Serialization {
        key: String,
        operation: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

/// Recovery hints for error handling
#[derive(Debug, Clone, PartialEq)]
pub enum RecoveryHint {
    /// Retry the operation
    Retry { after: Duration },

    /// Pick a fresh tree id; committed trees are never replaced
    UseFreshTreeId,

    /// Fix the input and try again
    FixInput { instructions: String },

    /// The stored record has to be restored from a trusted copy
    RestoreFromBackup,

    /// Update configuration
    UpdateConfiguration,

    /// Nothing to recover, the answer is final
    NoRecovery,
}
