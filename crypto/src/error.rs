#[cfg(feature = "std")]
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Error))]
pub enum FieldError {
    #[cfg_attr(
        feature = "std",
        error("invalid length: expected {expected} bytes, found {actual}")
    )]
    InvalidLength { expected: usize, actual: usize },

    #[cfg_attr(feature = "std", error("limb {index} is not a canonical field encoding"))]
    NonCanonicalLimb { index: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldError::InvalidLength { expected, actual } => {
                write!(
                    f,
                    "invalid length: expected {} bytes, found {}",
                    expected, actual
                )
            }
            FieldError::NonCanonicalLimb { index } => {
                write!(f, "limb {} is not a canonical field encoding", index)
            }
        }
    }
}
