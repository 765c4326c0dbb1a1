//! Accessors the commitment builder needs from transactions and certificates.

use crate::types::{Hash256, ScId};

/// A cross-chain output: a forward transfer or a backward-transfer request.
pub trait CrosschainOutput {
    fn sidechain_id(&self) -> ScId;
    fn output_hash(&self) -> Hash256;
}

pub trait SidechainTransaction {
    type ForwardTransfer: CrosschainOutput;
    type BwtRequest: CrosschainOutput;

    fn is_sidechain_version(&self) -> bool;
    fn hash(&self) -> Hash256;
    fn forward_transfers(&self) -> &[Self::ForwardTransfer];
    fn backward_transfer_requests(&self) -> &[Self::BwtRequest];
}

pub trait SidechainCertificate {
    fn sidechain_id(&self) -> ScId;
    fn hash(&self) -> Hash256;
}
