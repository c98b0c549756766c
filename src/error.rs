//! Error types for configuration and persistence.
//!
//! Guess rejection is not an error: it is reported as
//! [`Outcome::Rejected`](crate::core::Outcome::Rejected). These types cover
//! the fallible setup paths only.

use thiserror::Error;

use crate::core::TierId;

/// Invalid engine or tier configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Tier '{tier}' has an empty range: {min} > {max}")]
    EmptyRange { tier: TierId, min: i64, max: i64 },

    #[error("Tier '{0}' has a zero attempt limit")]
    ZeroAttemptLimit(TierId),

    #[error("Tier '{0}' is defined more than once")]
    DuplicateTier(TierId),

    #[error("Unknown tier '{0}'")]
    UnknownTier(TierId),

    #[error("No tiers configured")]
    NoTiers,

    #[error("Closeness thresholds must strictly increase (got {previous} then {next})")]
    ThresholdOrder { previous: u64, next: u64 },

    #[error("Closeness labels must not get warmer as distance grows")]
    LabelOrder,

    #[error("Malformed configuration JSON: {0}")]
    Parse(String),
}

/// Failure reading or writing the key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
