//! Builder methods for creating errors with context

use super::types::Error;
use crate::types::TreeId;

impl Error {
    /// Create a duplicate tree error
    #[must_use]
    pub fn duplicate_tree(tree_id: TreeId) -> Self {
        Error::DuplicateTreeId { tree_id }
    }

    /// Create a missing tree error
    #[must_use]
    pub fn tree_not_found(tree_id: TreeId) -> Self {
        Error::TreeNotFound { tree_id }
    }

    /// Create a missing leaf error
    #[must_use]
    pub fn leaf_not_found(identifier: impl Into<String>, tree_id: TreeId) -> Self {
        Error::LeafNotFound {
            identifier: identifier.into(),
            tree_id,
        }
    }

    /// Create a malformed proof error
    #[must_use]
    pub fn malformed_proof(reason: impl Into<String>) -> Self {
        Error::MalformedProof {
            reason: reason.into(),
        }
    }

    /// Create an invalid digest error
    #[must_use]
    pub fn invalid_digest(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidDigest {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a storage error from the collaborator's failure
    #[must_use]
    pub fn storage_unavailable(
        key: impl Into<String>,
        operation: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::StorageUnavailable {
            key: key.into(),
            operation,
            source: source.into(),
        }
    }

    /// Create a corruption error
    #[must_use]
    pub fn corruption(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Corruption {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a serialization error
    #[must_use]
    pub fn serialization(
        key: impl Into<String>,
        operation: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Serialization {
            key: key.into(),
            operation,
            source: source.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}
