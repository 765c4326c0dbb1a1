use sha2::{Digest, Sha256};

pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// The chain's content hash: SHA-256 applied twice.
pub fn hash256(data: &[u8]) -> [u8; 32] {
    hash256_parts(&[data])
}

/// Content hash over the concatenation of `parts`, without an intermediate buffer.
pub fn hash256_parts(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let first: [u8; 32] = hasher.finalize().into();
    sha256(&first)
}
