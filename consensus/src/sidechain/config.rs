use serde::{Deserialize, Serialize};

/// How output positions are counted when mapping a transaction's cross-chain
/// outputs to leaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputIndexing {
    /// One counter runs through forward transfers and then continues through
    /// backward-transfer requests. Required for existing chain data.
    #[default]
    Shared,
    /// Each category starts counting at zero.
    PerCategory,
}

/// What to do when a sidechain id cannot be mapped to a field element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScIdFieldPolicy {
    /// Abort the commitment computation.
    #[default]
    Strict,
    /// Substitute the empty field. Indistinguishable from an absent leaf.
    SentinelFallback,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitmentConfig {
    pub output_indexing: OutputIndexing,
    pub scid_field_policy: ScIdFieldPolicy,
}

impl CommitmentConfig {
    /// Settings that reproduce the legacy builder byte for byte.
    pub fn legacy() -> Self {
        Self {
            output_indexing: OutputIndexing::Shared,
            scid_field_policy: ScIdFieldPolicy::SentinelFallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_shared_indexing_and_strict_mapping() {
        let config = CommitmentConfig::default();
        assert_eq!(config.output_indexing, OutputIndexing::Shared);
        assert_eq!(config.scid_field_policy, ScIdFieldPolicy::Strict);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: CommitmentConfig =
            serde_json::from_str(r#"{"output_indexing":"per_category"}"#).unwrap();
        assert_eq!(config.output_indexing, OutputIndexing::PerCategory);
        assert_eq!(config.scid_field_policy, ScIdFieldPolicy::Strict);
    }

    #[test]
    fn legacy_serializes_in_snake_case() {
        let json = serde_json::to_string(&CommitmentConfig::legacy()).unwrap();
        assert_eq!(
            json,
            r#"{"output_indexing":"shared","scid_field_policy":"sentinel_fallback"}"#
        );
    }
}
