//! Error types and recovery hints for txproof operations

mod builders;
mod recovery;
mod types;

pub use types::{Error, RecoveryHint, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_storage_failures_are_transient() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "backend timed out");
        assert!(Error::storage_unavailable("tree_1", "get", io).is_transient());

        assert!(!Error::EmptyBatch.is_transient());
        assert!(!Error::duplicate_tree(3).is_transient());
        assert!(!Error::tree_not_found(3).is_transient());
        assert!(!Error::leaf_not_found("0xabc", 3).is_transient());
        assert!(!Error::malformed_proof("short sibling").is_transient());
        assert!(!Error::corruption("tree_3", "crc mismatch").is_transient());
    }

    #[test]
    fn duplicate_tree_asks_for_a_fresh_id() {
        assert_eq!(
            Error::duplicate_tree(14).recovery_hint(),
            RecoveryHint::UseFreshTreeId
        );
    }

    #[test]
    fn display_names_the_tree_and_identifier() {
        let err = Error::leaf_not_found("0x999", 14);
        assert_eq!(
            err.to_string(),
            "identifier '0x999' is not a leaf of Merkle tree 14"
        );
        assert_eq!(
            Error::duplicate_tree(14).to_string(),
            "Merkle tree 14 already exists"
        );
    }

    #[test]
    fn storage_error_keeps_its_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err = Error::storage_unavailable("tree_7", "put", io);
        assert_eq!(err.source().map(|s| s.to_string()), Some("disk gone".into()));
    }

    #[test]
    fn storage_errors_name_the_key_and_operation() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = Error::storage_unavailable("tree_9", "atomic link", io);
        assert_eq!(
            err.to_string(),
            "storage unavailable during atomic link on 'tree_9': read-only"
        );
    }

    #[test]
    fn unusable_keys_are_not_retryable() {
        let err = Error::InvalidKey {
            key: String::new(),
            reason: "key must not be empty".to_string(),
        };
        assert!(!err.is_transient());
        assert!(matches!(err.recovery_hint(), RecoveryHint::FixInput { .. }));
    }
}
