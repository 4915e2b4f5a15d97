//! Recovery utilities for txproof errors

use super::types::{Error, RecoveryHint};
use std::time::Duration;

impl Error {
    /// Get the recovery hint for this error
    #[must_use]
    pub fn recovery_hint(&self) -> RecoveryHint {
        match self {
            Self::StorageUnavailable { .. } => RecoveryHint::Retry {
                after: Duration::from_millis(100),
            },
            Self::DuplicateTreeId { .. } => RecoveryHint::UseFreshTreeId,
            Self::EmptyBatch => RecoveryHint::FixInput {
                instructions: "Provide at least one identifier".to_string(),
            },
            Self::MalformedProof { .. } | Self::InvalidDigest { .. } => RecoveryHint::FixInput {
                instructions: "Digests must be 32 bytes (64 hex characters)".to_string(),
            },
            Self::ReservedKey { .. } | Self::InvalidKey { .. } => RecoveryHint::FixInput {
                instructions: "Use a non-empty key without the tree_ prefix".to_string(),
            },
            Self::Corruption { .. } | Self::Serialization { .. } => RecoveryHint::RestoreFromBackup,
            Self::Configuration { .. } => RecoveryHint::UpdateConfiguration,
            Self::TreeNotFound { .. } | Self::LeafNotFound { .. } => RecoveryHint::NoRecovery,
        }
    }

    /// Check if this error is transient and can be retried
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self.recovery_hint(), RecoveryHint::Retry { .. })
    }
}
