//! Mapping between chain hashes and sidechain field elements.
//!
//! A 32-byte hash enters the field as its display hex (64 ASCII characters)
//! followed by NUL bytes up to `FIELD_SIZE`. A field element leaves it as the
//! content hash of its serialized bytes.

use crypto::field::{FIELD_SIZE, ScField};
use crypto::hashes::{hash256, hash256_parts};
use crypto::FieldError;

use crate::types::{Hash256, display_hex};

const HEX_DIGEST_LEN: usize = 2 * core::mem::size_of::<Hash256>();

const _: () = assert!(
    HEX_DIGEST_LEN <= FIELD_SIZE,
    "hex digest must fit in a field encoding"
);

fn padded_hex(hash: &Hash256) -> [u8; FIELD_SIZE] {
    let hex = display_hex(hash);
    let mut buf = [0u8; FIELD_SIZE];
    buf[..HEX_DIGEST_LEN].copy_from_slice(hex.as_bytes());
    buf
}

/// Leaf for the cross-chain output at `output_index` of transaction `tx_hash`.
pub fn map_output_reference(
    output_hash: &Hash256,
    tx_hash: &Hash256,
    output_index: u32,
) -> Result<ScField, FieldError> {
    let digest = hash256_parts(&[
        output_hash.as_slice(),
        tx_hash.as_slice(),
        &output_index.to_le_bytes(),
    ]);
    map_identifier(&digest)
}

/// Field element for a certificate hash or a sidechain id.
pub fn map_identifier(hash: &Hash256) -> Result<ScField, FieldError> {
    ScField::deserialize(&padded_hex(hash))
}

pub fn field_to_digest(field: &ScField) -> Hash256 {
    hash256(&field.serialize())
}
