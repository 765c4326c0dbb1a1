use crypto::field::ScField;
use state_merkle::{FieldMerkleTree, MerkleError};

/// Height of the per-sidechain tree over `[ft, btr, cert, scid]`.
pub const SIDECHAIN_TREE_HEIGHT: usize = 2 + 1;

/// `ceil(log2(leaf_count)) + 1`, the smallest height holding every leaf.
pub fn subtree_height(leaf_count: usize) -> usize {
    let bits = usize::BITS - leaf_count.saturating_sub(1).leading_zeros();
    bits as usize + 1
}

/// Root of the tree over `leaves`, or the empty field when there are none.
pub fn build_subtree_root(
    leaves: &[ScField],
    empty_field: &ScField,
) -> Result<ScField, MerkleError> {
    if leaves.is_empty() {
        return Ok(empty_field.clone());
    }
    let mut tree = FieldMerkleTree::new(subtree_height(leaves.len()))?;
    tree.extend(leaves.iter().cloned())?;
    tree.finalize_in_place();
    tree.root()
}

pub fn build_sidechain_root(leaves: [ScField; 4]) -> Result<ScField, MerkleError> {
    let mut tree = FieldMerkleTree::new(SIDECHAIN_TREE_HEIGHT)?;
    tree.extend(leaves)?;
    tree.finalize().root()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crypto::field::{FIELD_SIZE, merkle_node};

    fn leaf(tag: u8) -> ScField {
        let mut bytes = [0u8; FIELD_SIZE];
        bytes[0] = tag;
        bytes[1] = b'a';
        ScField::deserialize(&bytes).unwrap()
    }

    #[test]
    fn height_formula() {
        let expected = [(1, 1), (2, 2), (3, 3), (4, 3), (5, 4), (8, 4), (9, 5), (1024, 11)];
        for (count, height) in expected {
            assert_eq!(subtree_height(count), height, "leaf count {count}");
        }
    }

    #[test]
    fn empty_leaves_return_the_empty_field() {
        let empty = ScField::zero();
        assert_eq!(build_subtree_root(&[], &empty).unwrap(), empty);
    }

    #[test]
    fn single_leaf_root_is_the_leaf() {
        let root = build_subtree_root(&[leaf(4)], &ScField::zero()).unwrap();
        assert_eq!(root, leaf(4));
    }

    #[test]
    fn three_leaves_are_padded_to_four() {
        let leaves = [leaf(1), leaf(2), leaf(3)];
        let root = build_subtree_root(&leaves, &ScField::zero()).unwrap();
        let expected = merkle_node(
            &merkle_node(&leaves[0], &leaves[1]),
            &merkle_node(&leaves[2], &ScField::zero()),
        );
        assert_eq!(root, expected);
    }

    #[test]
    fn sidechain_root_hashes_all_four_slots() {
        let slots = [leaf(1), leaf(2), leaf(3), leaf(4)];
        let root = build_sidechain_root(slots.clone()).unwrap();
        let expected = merkle_node(
            &merkle_node(&slots[0], &slots[1]),
            &merkle_node(&slots[2], &slots[3]),
        );
        assert_eq!(root, expected);
    }
}
