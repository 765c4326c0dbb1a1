use crypto::field::{FIELD_SIZE, ScField};

use crate::error::CommitmentError;
use crate::merkle::block_merkle_root;
use crate::sidechain::config::{CommitmentConfig, OutputIndexing, ScIdFieldPolicy};
use crate::sidechain::field_map::{field_to_digest, map_identifier, map_output_reference};
use crate::sidechain::leaves::{LeafCategory, LeafStore, SidechainLeaves};
use crate::sidechain::subtree::{build_sidechain_root, build_subtree_root};
use crate::sidechain::traits::{CrosschainOutput, SidechainCertificate, SidechainTransaction};
use crate::types::{Hash256, ScId, display_hex};

/// Per-sidechain intermediate values of a commitment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidechainCommitment {
    pub sc_id: ScId,
    pub ft_root: ScField,
    pub btr_root: ScField,
    pub cert_leaf: ScField,
    pub sc_id_field: ScField,
    pub subtree_root: ScField,
    pub leaf_digest: Hash256,
}

/// Accumulates the sidechain activity of one block and folds it into the
/// block's sidechain transactions commitment.
///
/// Transactions and certificates are fed in block order. Finalization consumes
/// the builder, so it runs exactly once.
#[derive(Debug)]
pub struct SidechainTxsCommitmentBuilder {
    config: CommitmentConfig,
    store: LeafStore,
    empty_field: ScField,
}

impl SidechainTxsCommitmentBuilder {
    pub fn new() -> Result<Self, CommitmentError> {
        Self::with_config(CommitmentConfig::default())
    }

    pub fn with_config(config: CommitmentConfig) -> Result<Self, CommitmentError> {
        let empty_field = ScField::deserialize(&[0u8; FIELD_SIZE])?;
        Ok(Self {
            config,
            store: LeafStore::new(),
            empty_field,
        })
    }

    pub fn config(&self) -> &CommitmentConfig {
        &self.config
    }

    pub fn empty_field(&self) -> &ScField {
        &self.empty_field
    }

    pub fn leaf_store(&self) -> &LeafStore {
        &self.store
    }

    pub fn add_transaction<T: SidechainTransaction>(
        &mut self,
        tx: &T,
    ) -> Result<(), CommitmentError> {
        if !tx.is_sidechain_version() {
            return Ok(());
        }

        let tx_hash = tx.hash();
        let mut output_index = 0u32;

        tracing::debug!(
            target: "sc",
            tx = %display_hex(&tx_hash),
            "getting leaves for forward transfers"
        );
        for output in tx.forward_transfers() {
            self.add_crosschain_output(
                &tx_hash,
                output,
                output_index,
                LeafCategory::ForwardTransfer,
            )?;
            output_index = output_index.wrapping_add(1);
        }

        if self.config.output_indexing == OutputIndexing::PerCategory {
            output_index = 0;
        }

        tracing::debug!(
            target: "sc",
            tx = %display_hex(&tx_hash),
            "getting leaves for backward transfer requests"
        );
        for output in tx.backward_transfer_requests() {
            self.add_crosschain_output(
                &tx_hash,
                output,
                output_index,
                LeafCategory::BwtRequest,
            )?;
            output_index = output_index.wrapping_add(1);
        }

        tracing::debug!(target: "sc", output_index, "transaction leaves recorded");
        Ok(())
    }

    pub fn add_certificate<C: SidechainCertificate>(
        &mut self,
        cert: &C,
    ) -> Result<(), CommitmentError> {
        let scid = cert.sidechain_id();
        let leaf = map_identifier(&cert.hash())?;
        if self.store.record_certificate_leaf(scid, leaf).is_some() {
            tracing::debug!(target: "sc", scid = %display_hex(&scid), "replaced certificate leaf");
        }
        Ok(())
    }

    fn add_crosschain_output<O: CrosschainOutput>(
        &mut self,
        tx_hash: &Hash256,
        output: &O,
        output_index: u32,
        category: LeafCategory,
    ) -> Result<(), CommitmentError> {
        let leaf = map_output_reference(&output.output_hash(), tx_hash, output_index)?;
        self.store.record_leaf(output.sidechain_id(), category, leaf);
        Ok(())
    }

    /// Per-sidechain breakdown in ascending sidechain id order.
    pub fn sidechain_commitments(&self) -> Result<Vec<SidechainCommitment>, CommitmentError> {
        self.store
            .iter()
            .map(|(scid, leaves)| self.sidechain_commitment(scid, leaves))
            .collect()
    }

    fn sidechain_commitment(
        &self,
        scid: &ScId,
        leaves: &SidechainLeaves,
    ) -> Result<SidechainCommitment, CommitmentError> {
        let ft_root = build_subtree_root(&leaves.ft_leaves, &self.empty_field)?;
        let btr_root = build_subtree_root(&leaves.btr_leaves, &self.empty_field)?;
        let cert_leaf = leaves
            .cert_leaf
            .clone()
            .unwrap_or_else(|| self.empty_field.clone());
        let sc_id_field = self.map_sc_id(scid)?;

        let subtree_root = build_sidechain_root([
            ft_root.clone(),
            btr_root.clone(),
            cert_leaf.clone(),
            sc_id_field.clone(),
        ])?;
        let leaf_digest = field_to_digest(&subtree_root);

        tracing::debug!(
            target: "sc",
            scid = %display_hex(scid),
            ft_leaves = leaves.ft_leaves.len(),
            btr_leaves = leaves.btr_leaves.len(),
            has_cert = leaves.cert_leaf.is_some(),
            "built sidechain subtree"
        );

        Ok(SidechainCommitment {
            sc_id: *scid,
            ft_root,
            btr_root,
            cert_leaf,
            sc_id_field,
            subtree_root,
            leaf_digest,
        })
    }

    fn map_sc_id(&self, scid: &ScId) -> Result<ScField, CommitmentError> {
        match map_identifier(scid) {
            Ok(field) => Ok(field),
            Err(source) => match self.config.scid_field_policy {
                ScIdFieldPolicy::Strict => Err(CommitmentError::ScIdMapping {
                    scid: display_hex(scid),
                    source,
                }),
                ScIdFieldPolicy::SentinelFallback => {
                    tracing::warn!(
                        target: "sc",
                        scid = %display_hex(scid),
                        error = %source,
                        "sidechain id not mappable to field, using empty field"
                    );
                    Ok(self.empty_field.clone())
                }
            },
        }
    }

    pub fn compute_commitment(self) -> Result<Hash256, CommitmentError> {
        let leaves: Vec<Hash256> = self
            .sidechain_commitments()?
            .into_iter()
            .map(|sidechain| sidechain.leaf_digest)
            .collect();
        let commitment = block_merkle_root(&leaves);
        tracing::debug!(
            target: "sc",
            sidechains = leaves.len(),
            commitment = %display_hex(&commitment),
            "computed sidechain transactions commitment"
        );
        Ok(commitment)
    }
}

impl Default for SidechainTxsCommitmentBuilder {
    fn default() -> Self {
        Self::new().expect("all-zero field encoding is canonical")
    }
}

/// Commitment over the sidechain activity of one block.
pub fn compute_sidechain_commitment<T, C>(
    transactions: &[T],
    certificates: &[C],
    config: &CommitmentConfig,
) -> Result<Hash256, CommitmentError>
where
    T: SidechainTransaction,
    C: SidechainCertificate,
{
    let mut builder = SidechainTxsCommitmentBuilder::with_config(config.clone())?;
    for tx in transactions {
        builder.add_transaction(tx)?;
    }
    for cert in certificates {
        builder.add_certificate(cert)?;
    }
    builder.compute_commitment()
}
