use crypto::FieldError;
use state_merkle::MerkleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommitmentError {
    #[error("field encoding rejected: {0}")]
    Field(#[from] FieldError),
    #[error("sidechain subtree construction failed: {0}")]
    Tree(#[from] MerkleError),
    #[error("sidechain id {scid} does not map to a field element")]
    ScIdMapping {
        scid: String,
        #[source]
        source: FieldError,
    },
}
