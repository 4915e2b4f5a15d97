//! Property-based tests for the Merkle tree

#[cfg(test)]
mod proptest_tests {
    use crate::{verify_proof, MerkleTree};
    use proptest::prelude::*;

    fn batch() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z0-9]{1,12}", 1..40)
    }

    proptest! {
        #[test]
        fn test_every_member_verifies(identifiers in batch(), tree_id in any::<u64>()) {
            let tree = MerkleTree::build(tree_id, &identifiers).unwrap();

            prop_assert_eq!(tree.padded_leaf_count(), identifiers.len().next_power_of_two());

            for identifier in &identifiers {
                let proof = tree.generate_proof(identifier).unwrap();
                prop_assert_eq!(proof.siblings.len(), tree.height());
                prop_assert!((proof.index as usize) < tree.padded_leaf_count());
                prop_assert!(verify_proof(identifier, &proof, &tree.root()).unwrap());
            }
        }

        #[test]
        fn test_root_depends_only_on_batch(identifiers in batch(), a in any::<u64>(), b in any::<u64>()) {
            let first = MerkleTree::build(a, &identifiers).unwrap();
            let second = MerkleTree::build(b, &identifiers).unwrap();
            prop_assert_eq!(first.root(), second.root());
        }

        #[test]
        fn test_flipping_any_sibling_bit_fails(
            identifiers in prop::collection::vec("[a-z0-9]{1,12}", 2..40),
            pick in any::<prop::sample::Index>(),
            level in any::<prop::sample::Index>(),
            bit in 0usize..256,
        ) {
            let tree = MerkleTree::build(1, &identifiers).unwrap();
            let identifier = pick.get(&identifiers);
            let mut proof = tree.generate_proof(identifier).unwrap();

            let level = level.index(proof.siblings.len());
            proof.siblings[level][bit / 8] ^= 1 << (bit % 8);

            prop_assert!(!verify_proof(identifier, &proof, &tree.root()).unwrap());
        }

        #[test]
        fn test_non_members_have_no_proof(
            identifiers in batch(),
            outsider in "[A-Z]{1,12}",
        ) {
            let tree = MerkleTree::build(1, &identifiers).unwrap();
            prop_assert!(tree.generate_proof(&outsider).is_err());
        }
    }
}
