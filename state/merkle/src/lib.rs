//! Fixed-capacity, append-only Merkle tree over sidechain field elements.
//!
//! A tree of height `h` has `h` levels counting the leaves and the root, so it
//! holds up to `2^(h - 1)` leaves. Leaves are appended left to right; the tree
//! is hashed only when finalized, with unused capacity padded by the zero
//! element and its ancestors.

use crypto::field::{merkle_node, ScField};
use thiserror::Error;

/// Binary Merkle tree.
const BRANCH_FACTOR: usize = 2;

/// Largest supported height (2^31 leaves).
pub const MAX_TREE_HEIGHT: usize = 32;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("tree height {0} is outside 1..={max}", max = MAX_TREE_HEIGHT)]
    InvalidHeight(usize),
    #[error("merkle tree is full")]
    TreeFull,
    #[error("merkle tree is not finalized")]
    NotFinalized,
    #[error("merkle tree is already finalized")]
    AlreadyFinalized,
}

#[derive(Clone, Debug)]
pub struct FieldMerkleTree {
    height: usize,
    leaves: Vec<ScField>,
    default_nodes: Vec<ScField>,
    root: Option<ScField>,
}

impl FieldMerkleTree {
    pub fn new(height: usize) -> Result<Self, MerkleError> {
        if height == 0 || height > MAX_TREE_HEIGHT {
            return Err(MerkleError::InvalidHeight(height));
        }
        let mut default_nodes = Vec::with_capacity(height);
        default_nodes.push(ScField::zero());
        for level in 1..height {
            let prev = &default_nodes[level - 1];
            let next = merkle_node(prev, prev);
            default_nodes.push(next);
        }
        Ok(Self {
            height,
            leaves: Vec::new(),
            default_nodes,
            root: None,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn capacity(&self) -> usize {
        1usize << (self.height - 1)
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.leaves.len() == self.capacity()
    }

    pub fn is_finalized(&self) -> bool {
        self.root.is_some()
    }

    /// Append a leaf, returning its position.
    pub fn append(&mut self, leaf: ScField) -> Result<usize, MerkleError> {
        if self.is_finalized() {
            return Err(MerkleError::AlreadyFinalized);
        }
        if self.is_full() {
            return Err(MerkleError::TreeFull);
        }
        self.leaves.push(leaf);
        Ok(self.leaves.len() - 1)
    }

    pub fn extend<I>(&mut self, leaves: I) -> Result<(), MerkleError>
    where
        I: IntoIterator<Item = ScField>,
    {
        for leaf in leaves {
            self.append(leaf)?;
        }
        Ok(())
    }

    /// Hash the tree, padding unused capacity. Idempotent.
    pub fn finalize_in_place(&mut self) {
        if self.root.is_some() {
            return;
        }
        let mut level_nodes = self.leaves.clone();
        for level in 0..self.height - 1 {
            if level_nodes.is_empty() {
                break;
            }
            let default = &self.default_nodes[level];
            level_nodes = level_nodes
                .chunks(BRANCH_FACTOR)
                .map(|pair| match pair {
                    [left, right] => merkle_node(left, right),
                    [left] => merkle_node(left, default),
                    _ => unreachable!("chunks yields one or two nodes"),
                })
                .collect();
        }
        let root = match level_nodes.pop() {
            Some(root) => root,
            None => self.default_nodes[self.height - 1].clone(),
        };
        self.root = Some(root);
    }

    /// Finalized copy of this tree; `self` stays open for appends.
    pub fn finalize(&self) -> Self {
        let mut finalized = self.clone();
        finalized.finalize_in_place();
        finalized
    }

    /// Copy of the root. Only available once the tree is finalized.
    pub fn root(&self) -> Result<ScField, MerkleError> {
        self.root.clone().ok_or(MerkleError::NotFinalized)
    }
}
