//! Fixed-size field elements used by the sidechain commitment trees.
//!
//! An [`ScField`] is a vector of twelve Goldilocks limbs serialized as
//! `FIELD_SIZE` little-endian bytes. Deserialization only accepts canonical
//! limbs, so every value that crosses the byte boundary has exactly one
//! encoding.

use winterfell::math::{fields::f64::BaseElement, FieldElement, StarkField};

use crate::error::FieldError;

pub type Felt = BaseElement;

/// Number of Goldilocks limbs in a field element.
pub const FIELD_LIMBS: usize = 12;

/// Serialized width of a single limb.
pub const LIMB_SIZE: usize = 8;

/// Serialized width of a field element.
pub const FIELD_SIZE: usize = FIELD_LIMBS * LIMB_SIZE;

const POSEIDON_WIDTH: usize = 3;
const POSEIDON_RATE: usize = POSEIDON_WIDTH - 1;
const POSEIDON_ROUNDS: usize = 8;

/// Domain separation tag for tree nodes.
const MERKLE_DOMAIN_TAG: u64 = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScField {
    limbs: [Felt; FIELD_LIMBS],
}

impl ScField {
    pub fn zero() -> Self {
        Self {
            limbs: [Felt::ZERO; FIELD_LIMBS],
        }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|limb| *limb == Felt::ZERO)
    }

    /// Decode a field element, rejecting any limb outside the canonical range.
    pub fn deserialize(bytes: &[u8; FIELD_SIZE]) -> Result<Self, FieldError> {
        let mut limbs = [Felt::ZERO; FIELD_LIMBS];
        for (index, (limb, chunk)) in limbs
            .iter_mut()
            .zip(bytes.chunks_exact(LIMB_SIZE))
            .enumerate()
        {
            let mut buf = [0u8; LIMB_SIZE];
            buf.copy_from_slice(chunk);
            let value = u64::from_le_bytes(buf);
            if value >= Felt::MODULUS {
                return Err(FieldError::NonCanonicalLimb { index });
            }
            *limb = Felt::new(value);
        }
        Ok(Self { limbs })
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, FieldError> {
        let array: &[u8; FIELD_SIZE] =
            bytes.try_into().map_err(|_| FieldError::InvalidLength {
                expected: FIELD_SIZE,
                actual: bytes.len(),
            })?;
        Self::deserialize(array)
    }

    pub fn serialize(&self) -> [u8; FIELD_SIZE] {
        let mut out = [0u8; FIELD_SIZE];
        for (chunk, limb) in out.chunks_exact_mut(LIMB_SIZE).zip(self.limbs.iter()) {
            chunk.copy_from_slice(&limb.as_int().to_le_bytes());
        }
        out
    }
}

impl Default for ScField {
    fn default() -> Self {
        Self::zero()
    }
}

fn round_constant(round: usize, position: usize) -> Felt {
    let seed = ((round as u64 + 1) * 0x9e37_79b9u64) ^ ((position as u64 + 1) * 0x7f4a_7c15u64);
    Felt::new(seed)
}

fn mix(state: &mut [Felt; POSEIDON_WIDTH]) {
    const MIX: [[u64; POSEIDON_WIDTH]; POSEIDON_WIDTH] = [[2, 1, 1], [1, 2, 1], [1, 1, 2]];
    let snapshot = *state;
    let mut tmp = [Felt::ZERO; POSEIDON_WIDTH];
    for (row, output) in MIX.iter().zip(tmp.iter_mut()) {
        *output = row
            .iter()
            .zip(snapshot.iter())
            .fold(Felt::ZERO, |acc, (&coef, value)| acc + *value * Felt::new(coef));
    }
    *state = tmp;
}

fn permutation(state: &mut [Felt; POSEIDON_WIDTH]) {
    for round in 0..POSEIDON_ROUNDS {
        for (position, value) in state.iter_mut().enumerate() {
            *value += round_constant(round, position);
        }
        state.iter_mut().for_each(|value| *value = value.exp(5u64));
        mix(state);
    }
}

fn absorb(state: &mut [Felt; POSEIDON_WIDTH], chunk: &[Felt]) {
    for (slot, value) in state.iter_mut().zip(chunk.iter()) {
        *slot += *value;
    }
    permutation(state);
}

/// Two-to-one compression used for every internal node of a field tree.
pub fn merkle_node(left: &ScField, right: &ScField) -> ScField {
    let mut inputs = [Felt::ZERO; 2 * FIELD_LIMBS];
    inputs[..FIELD_LIMBS].copy_from_slice(&left.limbs);
    inputs[FIELD_LIMBS..].copy_from_slice(&right.limbs);

    let mut state = [Felt::new(MERKLE_DOMAIN_TAG), Felt::ZERO, Felt::ONE];
    for chunk in inputs.chunks(POSEIDON_RATE) {
        absorb(&mut state, chunk);
    }

    let mut limbs = [Felt::ZERO; FIELD_LIMBS];
    for (squeeze, out) in limbs.chunks_mut(POSEIDON_RATE).enumerate() {
        if squeeze > 0 {
            permutation(&mut state);
        }
        out.copy_from_slice(&state[..out.len()]);
    }
    ScField { limbs }
}
