//! Block-header Merkle tree over 32-byte hashes.
//!
//! Levels are stored back to back, leaves first. A level with an odd number of
//! nodes pairs its last node with itself. The root of an empty tree is the zero
//! hash and the root of a single leaf is the leaf itself.

use crypto::hashes::hash256_parts;

use crate::types::Hash256;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree {
    nodes: Vec<Hash256>,
    leaf_count: usize,
    mutated: bool,
}

fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
    hash256_parts(&[left.as_slice(), right.as_slice()])
}

impl MerkleTree {
    pub fn from_leaves(leaves: &[Hash256]) -> Self {
        let mut nodes = leaves.to_vec();
        let mut mutated = false;
        let mut offset = 0;
        let mut size = leaves.len();
        while size > 1 {
            for i in (0..size).step_by(2) {
                let i2 = usize::min(i + 1, size - 1);
                // Two equal trailing nodes hash like a duplicated odd node.
                if i2 == i + 1 && i2 + 1 == size && nodes[offset + i] == nodes[offset + i2] {
                    mutated = true;
                }
                let parent = hash_pair(&nodes[offset + i], &nodes[offset + i2]);
                nodes.push(parent);
            }
            offset += size;
            size = size.div_ceil(2);
        }
        Self {
            nodes,
            leaf_count: leaves.len(),
            mutated,
        }
    }

    pub fn root(&self) -> Hash256 {
        self.nodes.last().copied().unwrap_or([0u8; 32])
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// True when the leaf list ends in a duplicated pair, which yields the
    /// same root as the list without the duplicate.
    pub fn is_mutated(&self) -> bool {
        self.mutated
    }

    /// Sibling hashes from the leaf at `index` up to (excluding) the root.
    pub fn branch(&self, index: usize) -> Option<Vec<Hash256>> {
        if index >= self.leaf_count {
            return None;
        }
        let mut branch = Vec::new();
        let mut position = index;
        let mut offset = 0;
        let mut size = self.leaf_count;
        while size > 1 {
            let sibling = usize::min(position ^ 1, size - 1);
            branch.push(self.nodes[offset + sibling]);
            position >>= 1;
            offset += size;
            size = size.div_ceil(2);
        }
        Some(branch)
    }
}

/// Root of the block-header Merkle tree built over `leaves`.
pub fn block_merkle_root(leaves: &[Hash256]) -> Hash256 {
    MerkleTree::from_leaves(leaves).root()
}

/// Fold `branch` over `leaf` at `index`, returning the implied root.
pub fn check_merkle_branch(leaf: Hash256, branch: &[Hash256], index: usize) -> Hash256 {
    let mut hash = leaf;
    let mut position = index;
    for sibling in branch {
        hash = if position & 1 == 1 {
            hash_pair(sibling, &hash)
        } else {
            hash_pair(&hash, sibling)
        };
        position >>= 1;
    }
    hash
}
