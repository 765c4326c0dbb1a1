#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod field;
pub mod hashes;

pub use error::FieldError;
pub use field::{merkle_node, ScField, FIELD_SIZE};
