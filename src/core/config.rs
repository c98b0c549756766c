//! Game configuration types.
//!
//! Callers configure the engine at startup by providing:
//! - `DifficultyTier`: A named range and attempt budget
//! - `TierSet`: The ordered tiers a player can pick from
//! - `EngineConfig`: Combines tiers, the closeness scale, and the store key
//!
//! `EngineConfig::default()` reproduces the classic easy/medium/hard setup.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::feedback::ClosenessScale;

/// Tier identifier, e.g. `"easy"`.
///
/// Also used as the key of the tier's entry in the persisted best scores.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierId(String);

impl TierId {
    /// Create a new tier ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the tier name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn easy() -> Self {
        Self::new("easy")
    }

    pub fn medium() -> Self {
        Self::new("medium")
    }

    pub fn hard() -> Self {
        Self::new("hard")
    }
}

impl std::fmt::Display for TierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TierId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A named range and attempt budget.
///
/// Immutable once a session has started from it. Selecting a different
/// tier always starts a fresh session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTier {
    /// Unique identifier for this tier.
    pub id: TierId,

    /// Smallest value the secret can take (inclusive).
    pub min_value: i64,

    /// Largest value the secret can take (inclusive).
    pub max_value: i64,

    /// Number of accepted guesses before the session is lost.
    pub attempt_limit: u32,
}

impl DifficultyTier {
    /// Create a new tier. Call `validate` before using untrusted values.
    pub fn new(id: impl Into<TierId>, min_value: i64, max_value: i64, attempt_limit: u32) -> Self {
        Self {
            id: id.into(),
            min_value,
            max_value,
            attempt_limit,
        }
    }

    /// 1..=50 with 12 attempts.
    pub fn easy() -> Self {
        Self::new(TierId::easy(), 1, 50, 12)
    }

    /// 1..=100 with 10 attempts.
    pub fn medium() -> Self {
        Self::new(TierId::medium(), 1, 100, 10)
    }

    /// 1..=200 with 8 attempts.
    pub fn hard() -> Self {
        Self::new(TierId::hard(), 1, 200, 8)
    }

    /// Check that the range is non-empty and the budget is positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_value > self.max_value {
            return Err(ConfigError::EmptyRange {
                tier: self.id.clone(),
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.attempt_limit == 0 {
            return Err(ConfigError::ZeroAttemptLimit(self.id.clone()));
        }
        Ok(())
    }

    /// Is `value` inside the configured range?
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.min_value..=self.max_value).contains(&value)
    }
}

/// Ordered collection of tiers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierSet {
    tiers: Vec<DifficultyTier>,
}

impl TierSet {
    /// Create an empty tier set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Easy, medium, and hard.
    pub fn standard() -> Self {
        Self::new()
            .with_tier(DifficultyTier::easy())
            .with_tier(DifficultyTier::medium())
            .with_tier(DifficultyTier::hard())
    }

    /// A set with a single tier, for callers that do not use tiering.
    pub fn single(tier: DifficultyTier) -> Self {
        Self::new().with_tier(tier)
    }

    /// Add a tier.
    #[must_use]
    pub fn with_tier(mut self, tier: DifficultyTier) -> Self {
        self.tiers.push(tier);
        self
    }

    /// Get a tier by ID.
    #[must_use]
    pub fn get(&self, id: &TierId) -> Option<&DifficultyTier> {
        self.tiers.iter().find(|t| &t.id == id)
    }

    /// Iterate tiers in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &DifficultyTier> {
        self.tiers.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Validate every tier and reject duplicate IDs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tiers.is_empty() {
            return Err(ConfigError::NoTiers);
        }
        for (i, tier) in self.tiers.iter().enumerate() {
            tier.validate()?;
            if self.tiers[..i].iter().any(|t| t.id == tier.id) {
                return Err(ConfigError::DuplicateTier(tier.id.clone()));
            }
        }
        Ok(())
    }
}

/// Complete engine configuration.
///
/// Missing fields in JSON fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tiers the player can choose from.
    pub tiers: TierSet,

    /// Tier used when a game starts without an explicit choice.
    pub default_tier: TierId,

    /// Distance-to-label mapping for incorrect guesses.
    pub closeness: ClosenessScale,

    /// Key under which best scores are persisted.
    pub store_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tiers: TierSet::standard(),
            default_tier: TierId::medium(),
            closeness: ClosenessScale::default(),
            store_key: "ninjaBestScores".to_string(),
        }
    }
}

impl EngineConfig {
    /// Configuration with a single tier and no tier selection.
    pub fn single_tier(tier: DifficultyTier) -> Self {
        Self {
            default_tier: tier.id.clone(),
            tiers: TierSet::single(tier),
            ..Self::default()
        }
    }

    /// Replace the tier set. The default tier becomes the first new tier.
    #[must_use]
    pub fn with_tiers(mut self, tiers: TierSet) -> Self {
        if let Some(first) = tiers.iter().next() {
            self.default_tier = first.id.clone();
        }
        self.tiers = tiers;
        self
    }

    /// Set the default tier.
    #[must_use]
    pub fn with_default_tier(mut self, tier: impl Into<TierId>) -> Self {
        self.default_tier = tier.into();
        self
    }

    /// Set the closeness scale.
    #[must_use]
    pub fn with_closeness(mut self, closeness: ClosenessScale) -> Self {
        self.closeness = closeness;
        self
    }

    /// Set the persistence key.
    #[must_use]
    pub fn with_store_key(mut self, key: impl Into<String>) -> Self {
        self.store_key = key.into();
        self
    }

    /// Get a tier by ID.
    pub fn tier(&self, id: &TierId) -> Result<&DifficultyTier, ConfigError> {
        self.tiers
            .get(id)
            .ok_or_else(|| ConfigError::UnknownTier(id.clone()))
    }

    /// Check tiers, the default tier, and the closeness scale.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tiers.validate()?;
        self.tier(&self.default_tier)?;
        self.closeness.validate()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Closeness;

    #[test]
    fn test_tier_id() {
        let id = TierId::new("easy");
        assert_eq!(id.as_str(), "easy");
        assert_eq!(format!("{}", id), "easy");
        assert_eq!(id, TierId::easy());
    }

    #[test]
    fn test_standard_tiers() {
        let tiers = TierSet::standard();
        assert_eq!(tiers.len(), 3);

        let hard = tiers.get(&TierId::hard()).unwrap();
        assert_eq!((hard.min_value, hard.max_value, hard.attempt_limit), (1, 200, 8));
        assert!(tiers.get(&TierId::new("nightmare")).is_none());
        assert!(tiers.validate().is_ok());
    }

    #[test]
    fn test_tier_contains() {
        let tier = DifficultyTier::medium();
        assert!(tier.contains(1));
        assert!(tier.contains(100));
        assert!(!tier.contains(0));
        assert!(!tier.contains(101));
    }

    #[test]
    fn test_tier_validation() {
        assert_eq!(
            DifficultyTier::new("bad", 10, 1, 5).validate(),
            Err(ConfigError::EmptyRange {
                tier: TierId::new("bad"),
                min: 10,
                max: 1
            })
        );
        assert_eq!(
            DifficultyTier::new("none", 1, 10, 0).validate(),
            Err(ConfigError::ZeroAttemptLimit(TierId::new("none")))
        );
        assert!(DifficultyTier::new("one", 5, 5, 1).validate().is_ok());
    }

    #[test]
    fn test_duplicate_tiers_rejected() {
        let tiers = TierSet::new()
            .with_tier(DifficultyTier::easy())
            .with_tier(DifficultyTier::new("easy", 1, 10, 3));
        assert_eq!(tiers.validate(), Err(ConfigError::DuplicateTier(TierId::easy())));
        assert_eq!(TierSet::new().validate(), Err(ConfigError::NoTiers));
    }

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.default_tier, TierId::medium());
        assert_eq!(config.store_key, "ninjaBestScores");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_tiers(TierSet::single(DifficultyTier::new("classic", 1, 20, 5)))
            .with_closeness(ClosenessScale::graded())
            .with_store_key("scores");

        assert_eq!(config.default_tier, TierId::new("classic"));
        assert_eq!(config.store_key, "scores");
        assert!(config.validate().is_ok());

        let config = config.with_default_tier("missing");
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownTier(TierId::new("missing")))
        );
    }

    #[test]
    fn test_single_tier() {
        let config = EngineConfig::single_tier(DifficultyTier::new("only", 1, 10, 3));
        assert_eq!(config.tiers.len(), 1);
        assert_eq!(config.tier(&TierId::new("only")).unwrap().max_value, 10);
    }

    #[test]
    fn test_from_json_partial() {
        let json = r#"{
            "tiers": [{"id": "tiny", "min_value": 1, "max_value": 5, "attempt_limit": 2}],
            "default_tier": "tiny"
        }"#;
        let config = EngineConfig::from_json(json).unwrap();
        assert_eq!(config.tiers.len(), 1);
        assert_eq!(config.store_key, "ninjaBestScores");
        assert_eq!(config.closeness.classify(0), Closeness::BurningHot);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let json = r#"{"tiers": [{"id": "x", "min_value": 9, "max_value": 1, "attempt_limit": 2}], "default_tier": "x"}"#;
        assert!(matches!(
            EngineConfig::from_json(json),
            Err(ConfigError::EmptyRange { .. })
        ));
        assert!(matches!(
            EngineConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
