//! Basic tree construction tests

use super::helpers::*;
use crate::hashing::{compute_internal_hash, compute_leaf_hash};
use crate::MerkleTree;
use txproof_core::{Error, SENTINEL_DIGEST};

#[test]
fn test_empty_batch_is_rejected() {
    let empty: Vec<String> = Vec::new();
    assert!(matches!(
        MerkleTree::build(1, &empty),
        Err(Error::EmptyBatch)
    ));
}

#[test]
fn test_single_entry() {
    let tree = MerkleTree::build(1, &["only"]).unwrap();

    assert_eq!(tree.leaf_count(), 1);
    assert_eq!(tree.padded_leaf_count(), 1);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.root(), compute_leaf_hash(b"only"));
}

#[test]
fn test_three_entries_are_padded_with_sentinel() {
    let tree = MerkleTree::build(14, &scenario_batch()).unwrap();

    assert_eq!(tree.leaf_count(), 3);
    assert_eq!(tree.padded_leaf_count(), 4);
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.levels()[0][3], SENTINEL_DIGEST);

    let a = compute_leaf_hash(b"0xabc");
    let b = compute_leaf_hash(b"0xdef");
    let c = compute_leaf_hash(b"0x123");
    let left = compute_internal_hash(&a, &b);
    let right = compute_internal_hash(&c, &SENTINEL_DIGEST);
    assert_eq!(tree.root(), compute_internal_hash(&left, &right));
}

#[test]
fn test_level_widths_halve() {
    let tree = MerkleTree::build(5, &identifiers(9)).unwrap();

    let widths: Vec<usize> = tree.levels().iter().map(Vec::len).collect();
    assert_eq!(widths, vec![16, 8, 4, 2, 1]);
}

#[test]
fn test_power_of_two_batch_has_no_padding() {
    let tree = MerkleTree::build(5, &identifiers(8)).unwrap();

    assert_eq!(tree.padded_leaf_count(), 8);
    assert!(!tree.levels()[0].contains(&SENTINEL_DIGEST));
}

#[test]
fn test_root_is_independent_of_tree_id() {
    let batch = identifiers(6);
    let first = MerkleTree::build(1, &batch).unwrap();
    let second = MerkleTree::build(99, &batch).unwrap();

    assert_eq!(first.root(), second.root());
}

#[test]
fn test_batch_order_changes_root() {
    let mut batch = identifiers(4);
    let forward = MerkleTree::build(1, &batch).unwrap();
    batch.reverse();
    let reversed = MerkleTree::build(1, &batch).unwrap();

    assert_ne!(forward.root(), reversed.root());
}

#[test]
fn test_integrity_of_fresh_tree() {
    let tree = MerkleTree::build(3, &identifiers(5)).unwrap();
    let report = tree.verify_integrity();

    assert!(report.tree_valid);
    assert_eq!(report.total_leaves, 5);
    assert!(report.mismatched_nodes.is_empty());
    assert_eq!(report.root_hash, tree.root());
}

#[test]
fn test_integrity_detects_tampered_node() {
    let tree = MerkleTree::build(3, &identifiers(5)).unwrap();
    let mut state = tree.export_state();
    state.levels[1][2][0] ^= 0x01;
    let tampered = MerkleTree::import_state(state).unwrap();

    let report = tampered.verify_integrity();
    assert!(!report.tree_valid);
    // The tampered node and the parent computed from it both disagree.
    assert!(report.mismatched_nodes.contains(&(1, 2)));
    assert!(report.mismatched_nodes.contains(&(2, 1)));
}

#[test]
fn test_display() {
    let tree = MerkleTree::build(14, &scenario_batch()).unwrap();
    let shown = tree.to_string();

    assert!(shown.starts_with("MerkleTree { id: 14, leaves: 3, height: 2, root: "));
}
