//! Sidechain transactions commitment.
//!
//! Every forward transfer, backward-transfer request and certificate seen in a
//! block becomes a field-element leaf under its sidechain id. Per sidechain the
//! leaves are folded into a four-slot subtree `[ft, btr, cert, scid]`; the
//! digests of those subtrees, in ascending sidechain id order, are combined with
//! the block-header Merkle root into a single 32-byte commitment.

pub mod builder;
pub mod config;
pub mod field_map;
pub mod leaves;
pub mod subtree;
pub mod traits;

pub use builder::{
    SidechainCommitment, SidechainTxsCommitmentBuilder, compute_sidechain_commitment,
};
pub use config::{CommitmentConfig, OutputIndexing, ScIdFieldPolicy};
pub use field_map::{field_to_digest, map_identifier, map_output_reference};
pub use leaves::{LeafCategory, LeafStore, SidechainLeaves};
pub use subtree::{
    SIDECHAIN_TREE_HEIGHT, build_sidechain_root, build_subtree_root, subtree_height,
};
pub use traits::{CrosschainOutput, SidechainCertificate, SidechainTransaction};
