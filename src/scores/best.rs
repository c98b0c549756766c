//! Best score per tier.
//!
//! Persisted as one JSON object under a single store key, for example
//! `{"easy":null,"medium":4,"hard":null}`. Anything unreadable in that
//! object counts as "no best score" rather than an error.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::{info, warn};

use crate::core::{TierId, TierSet};
use crate::error::StoreError;
use crate::rules::improves_best;

use super::store::KeyValueStore;

/// Fewest attempts needed to win, per tier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BestScores {
    scores: FxHashMap<TierId, u32>,
}

impl BestScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `store` under `key`. Never fails.
    pub fn load(store: &impl KeyValueStore, key: &str) -> Self {
        match store.get(key) {
            Ok(Some(text)) => Self::parse(&text),
            Ok(None) => Self::new(),
            Err(e) => {
                warn!(key, error = %e, "Could not read best scores");
                Self::new()
            }
        }
    }

    /// Parse the persisted JSON, dropping anything malformed.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let map = match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                warn!(found = %other, "Best scores are not a JSON object");
                return Self::new();
            }
            Err(e) => {
                warn!(error = %e, "Best scores are not valid JSON");
                return Self::new();
            }
        };

        let mut scores = FxHashMap::default();
        for (tier, value) in map {
            match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
                Some(n) if n > 0 => {
                    scores.insert(TierId::new(tier), n);
                }
                _ if value.is_null() => {}
                _ => warn!(tier = %tier, value = %value, "Ignoring malformed best score"),
            }
        }
        Self { scores }
    }

    /// Best score for `tier`, if any.
    #[must_use]
    pub fn get(&self, tier: &TierId) -> Option<u32> {
        self.scores.get(tier).copied()
    }

    /// Record a win. Returns `true` if it set a new best.
    pub fn record_win(&mut self, tier: &TierId, attempts: u32) -> bool {
        if !improves_best(self.get(tier), attempts) {
            return false;
        }
        info!(tier = %tier, attempts, "New best score");
        self.scores.insert(tier.clone(), attempts);
        true
    }

    /// JSON representation, keys sorted.
    ///
    /// Every tier in `tiers` gets an entry, `null` when it has no score.
    /// Scores for tiers outside `tiers` are kept.
    #[must_use]
    pub fn to_json(&self, tiers: &TierSet) -> String {
        let mut sorted: BTreeMap<&str, Option<u32>> =
            tiers.iter().map(|tier| (tier.id.as_str(), None)).collect();
        for (tier, &n) in &self.scores {
            sorted.insert(tier.as_str(), Some(n));
        }
        // A map of strings to optional integers always serializes.
        serde_json::to_string(&sorted).unwrap_or_default()
    }

    /// Write to `store` under `key`, with an entry for each of `tiers`.
    pub fn save(
        &self,
        store: &mut impl KeyValueStore,
        key: &str,
        tiers: &TierSet,
    ) -> Result<(), StoreError> {
        store.set(key, &self.to_json(tiers))
    }
}
