pub mod error;
pub mod merkle;
pub mod sidechain;
pub mod types;

pub use error::CommitmentError;
pub use merkle::{MerkleTree, block_merkle_root, check_merkle_branch};
pub use sidechain::{
    CommitmentConfig, CrosschainOutput, OutputIndexing, ScIdFieldPolicy, SidechainCertificate,
    SidechainCommitment, SidechainTransaction, SidechainTxsCommitmentBuilder,
    compute_sidechain_commitment,
};
pub use types::{
    Amount, BwtRequestOut, Certificate, ForwardTransferOut, Hash256, SC_CERT_VERSION,
    SC_TX_VERSION, ScId, Transaction, TxOut, display_hex,
};
