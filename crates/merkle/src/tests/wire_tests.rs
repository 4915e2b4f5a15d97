//! Proof wire format tests

use super::helpers::*;
use crate::{verify_proof, MerkleProof, MerkleTree};
use txproof_core::Error;

#[test]
fn test_json_layout() {
    let tree = MerkleTree::build(14, &scenario_batch()).unwrap();
    let proof = tree.generate_proof("0xdef").unwrap();
    let value: serde_json::Value = serde_json::from_str(&proof.to_json().unwrap()).unwrap();

    assert_eq!(value["index"], 1);
    let siblings = value["siblings"].as_array().unwrap();
    assert_eq!(siblings.len(), 2);
    assert_eq!(siblings[0], hex::encode(proof.siblings[0]));
    assert_eq!(siblings[1], hex::encode(proof.siblings[1]));
}

#[test]
fn test_decoded_json_proof_still_verifies() {
    let tree = MerkleTree::build(9, &identifiers(11)).unwrap();
    let proof = tree.generate_proof("0x0007").unwrap();
    let decoded = MerkleProof::from_json(&proof.to_json().unwrap()).unwrap();

    assert_eq!(decoded, proof);
    assert!(verify_proof("0x0007", &decoded, &tree.root()).unwrap());
}

#[test]
fn test_decoded_binary_proof_still_verifies() {
    let tree = MerkleTree::build(9, &identifiers(11)).unwrap();
    let proof = tree.generate_proof("0x000a").unwrap();
    let bytes = proof.to_bytes();

    assert_eq!(bytes.len(), 8 + 4 + 32 * proof.siblings.len());
    let decoded = MerkleProof::from_bytes(&bytes).unwrap();
    assert!(verify_proof("0x000a", &decoded, &tree.root()).unwrap());
}

#[test]
fn test_negative_index_is_malformed() {
    let text = format!(r#"{{"index": -1, "siblings": ["{}"]}}"#, "00".repeat(32));

    assert!(matches!(
        MerkleProof::from_json(&text),
        Err(Error::MalformedProof { .. })
    ));
}

#[test]
fn test_short_sibling_is_malformed() {
    let text = format!(r#"{{"index": 0, "siblings": ["{}"]}}"#, "00".repeat(31));

    assert!(matches!(
        MerkleProof::from_json(&text),
        Err(Error::MalformedProof { .. })
    ));
}

#[test]
fn test_truncated_bytes_are_malformed() {
    let tree = MerkleTree::build(9, &identifiers(4)).unwrap();
    let bytes = tree.generate_proof("0x0001").unwrap().to_bytes();

    for cut in [0, 5, 12, bytes.len() - 1] {
        assert!(matches!(
            MerkleProof::from_bytes(&bytes[..cut]),
            Err(Error::MalformedProof { .. })
        ));
    }
}

#[test]
fn test_trailing_bytes_are_malformed() {
    let tree = MerkleTree::build(9, &identifiers(4)).unwrap();
    let mut bytes = tree.generate_proof("0x0001").unwrap().to_bytes();
    bytes.extend_from_slice(&[0u8; 32]);

    assert!(matches!(
        MerkleProof::from_bytes(&bytes),
        Err(Error::MalformedProof { .. })
    ));
}
