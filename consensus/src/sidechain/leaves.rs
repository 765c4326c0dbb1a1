//! Per-sidechain leaf accumulation.

use std::collections::BTreeMap;

use crypto::field::ScField;

use crate::types::ScId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafCategory {
    ForwardTransfer,
    BwtRequest,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidechainLeaves {
    pub ft_leaves: Vec<ScField>,
    pub btr_leaves: Vec<ScField>,
    pub cert_leaf: Option<ScField>,
}

/// Leaves grouped by sidechain id. The map keys are the set of touched ids
/// and iterate in ascending byte order.
#[derive(Clone, Debug, Default)]
pub struct LeafStore {
    sidechains: BTreeMap<ScId, SidechainLeaves>,
}

impl LeafStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_leaf(&mut self, scid: ScId, category: LeafCategory, leaf: ScField) {
        let entry = self.sidechains.entry(scid).or_default();
        match category {
            LeafCategory::ForwardTransfer => entry.ft_leaves.push(leaf),
            LeafCategory::BwtRequest => entry.btr_leaves.push(leaf),
        }
    }

    /// Store the certificate leaf for `scid`, returning the one it replaces.
    pub fn record_certificate_leaf(&mut self, scid: ScId, leaf: ScField) -> Option<ScField> {
        self.sidechains
            .entry(scid)
            .or_default()
            .cert_leaf
            .replace(leaf)
    }

    pub fn get(&self, scid: &ScId) -> Option<&SidechainLeaves> {
        self.sidechains.get(scid)
    }

    pub fn sidechain_ids(&self) -> impl Iterator<Item = &ScId> {
        self.sidechains.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ScId, &SidechainLeaves)> {
        self.sidechains.iter()
    }

    pub fn len(&self) -> usize {
        self.sidechains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sidechains.is_empty()
    }
}
