use codec::{Decode, Encode};
use crypto::hashes::hash256;

use crate::sidechain::traits::{CrosschainOutput, SidechainCertificate, SidechainTransaction};

pub type Hash256 = [u8; 32];
pub type ScId = [u8; 32];
pub type PubKeyHash = [u8; 20];
pub type Amount = u64;

pub const TRANSPARENT_TX_VERSION: i32 = 1;
pub const SC_TX_VERSION: i32 = -4;
pub const SC_CERT_VERSION: i32 = -5;

/// Hex form used when hashes are displayed: bytes reversed, lowercase.
pub fn display_hex(hash: &Hash256) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}

#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct ForwardTransferOut {
    pub sc_id: ScId,
    pub amount: Amount,
    pub address: [u8; 32],
}

#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct BwtRequestOut {
    pub sc_id: ScId,
    pub sc_fee: Amount,
    pub mc_destination: PubKeyHash,
    pub sc_request_data: Vec<[u8; 32]>,
}

#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct TxOut {
    pub value: Amount,
    pub script_pubkey: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct Transaction {
    pub version: i32,
    pub outputs: Vec<TxOut>,
    pub forward_transfers: Vec<ForwardTransferOut>,
    pub backward_transfer_requests: Vec<BwtRequestOut>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn new_sidechain(
        forward_transfers: Vec<ForwardTransferOut>,
        backward_transfer_requests: Vec<BwtRequestOut>,
    ) -> Self {
        Self {
            version: SC_TX_VERSION,
            outputs: Vec::new(),
            forward_transfers,
            backward_transfer_requests,
            lock_time: 0,
        }
    }

    pub fn new_transparent(outputs: Vec<TxOut>) -> Self {
        Self {
            version: TRANSPARENT_TX_VERSION,
            outputs,
            forward_transfers: Vec::new(),
            backward_transfer_requests: Vec::new(),
            lock_time: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct BackwardTransferOut {
    pub amount: Amount,
    pub pubkey_hash: PubKeyHash,
}

#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct Certificate {
    pub version: i32,
    pub sc_id: ScId,
    pub epoch_number: i32,
    pub quality: i64,
    pub end_epoch_block_hash: Hash256,
    pub backward_transfers: Vec<BackwardTransferOut>,
}

impl Certificate {
    pub fn new(sc_id: ScId, epoch_number: i32, quality: i64) -> Self {
        Self {
            version: SC_CERT_VERSION,
            sc_id,
            epoch_number,
            quality,
            end_epoch_block_hash: [0u8; 32],
            backward_transfers: Vec::new(),
        }
    }
}

impl CrosschainOutput for ForwardTransferOut {
    fn sidechain_id(&self) -> ScId {
        self.sc_id
    }

    fn output_hash(&self) -> Hash256 {
        hash256(&self.encode())
    }
}

impl CrosschainOutput for BwtRequestOut {
    fn sidechain_id(&self) -> ScId {
        self.sc_id
    }

    fn output_hash(&self) -> Hash256 {
        hash256(&self.encode())
    }
}

impl SidechainTransaction for Transaction {
    type ForwardTransfer = ForwardTransferOut;
    type BwtRequest = BwtRequestOut;

    fn is_sidechain_version(&self) -> bool {
        self.version == SC_TX_VERSION
    }

    fn hash(&self) -> Hash256 {
        hash256(&self.encode())
    }

    fn forward_transfers(&self) -> &[ForwardTransferOut] {
        &self.forward_transfers
    }

    fn backward_transfer_requests(&self) -> &[BwtRequestOut] {
        &self.backward_transfer_requests
    }
}

impl SidechainCertificate for Certificate {
    fn sidechain_id(&self) -> ScId {
        self.sc_id
    }

    fn hash(&self) -> Hash256 {
        hash256(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_hex_reverses_byte_order() {
        let mut hash = [0u8; 32];
        hash[0] = 0xab;
        hash[31] = 0x01;
        let hex = display_hex(&hash);
        assert_eq!(hex.len(), 64);
        assert!(hex.starts_with("01"));
        assert!(hex.ends_with("ab"));
    }

    #[test]
    fn transaction_hash_covers_version() {
        let fts = vec![ForwardTransferOut {
            sc_id: [1u8; 32],
            amount: 10,
            address: [2u8; 32],
        }];
        let sc_tx = Transaction::new_sidechain(fts, Vec::new());
        let mut other = sc_tx.clone();
        other.version = TRANSPARENT_TX_VERSION;
        assert!(sc_tx.is_sidechain_version());
        assert!(!other.is_sidechain_version());
        assert_ne!(sc_tx.hash(), other.hash());
    }

    #[test]
    fn certificate_encoding_is_decodable() {
        let cert = Certificate::new([9u8; 32], 3, 7);
        let decoded = Certificate::decode(&mut &cert.encode()[..]).unwrap();
        assert_eq!(decoded, cert);
        assert_eq!(decoded.hash(), cert.hash());
    }

    #[test]
    fn output_hash_depends_on_every_field() {
        let base = BwtRequestOut {
            sc_id: [3u8; 32],
            sc_fee: 1,
            mc_destination: [4u8; 20],
            sc_request_data: vec![[5u8; 32]],
        };
        let mut changed = base.clone();
        changed.sc_request_data.push([6u8; 32]);
        assert_ne!(base.output_hash(), changed.output_hash());
        assert_eq!(base.sidechain_id(), [3u8; 32]);
    }
}
