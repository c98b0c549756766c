//! Closeness scale: a monotone step function from distance to label.
//!
//! A scale is an ordered list of steps `(below, label)`. A distance `d`
//! takes the label of the first step with `d < below`, or the scale's
//! `beyond` label when no step matches. Thresholds strictly increase and
//! labels never get warmer as distance grows, so the mapping is monotone.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::ConfigError;

/// Qualitative closeness of a wrong guess, warmest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Closeness {
    BurningHot,
    Hot,
    Warm,
    Cold,
    IceCold,
}

impl Closeness {
    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Closeness::BurningHot => "burning hot",
            Closeness::Hot => "hot",
            Closeness::Warm => "warm",
            Closeness::Cold => "cold",
            Closeness::IceCold => "ice cold",
        }
    }
}

impl std::fmt::Display for Closeness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One step of a scale: distances below `below` get `label`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosenessStep {
    pub below: u64,
    pub label: Closeness,
}

/// Distance-to-label mapping.
///
/// ```
/// use guess_engine::feedback::{Closeness, ClosenessScale};
///
/// let scale = ClosenessScale::ninja();
/// assert_eq!(scale.classify(3), Closeness::BurningHot);
/// assert_eq!(scale.classify(14), Closeness::Warm);
/// assert_eq!(scale.classify(40), Closeness::IceCold);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosenessScale {
    /// Steps in increasing threshold order.
    /// SmallVec covers the usual 2-4 steps without heap allocation.
    steps: SmallVec<[ClosenessStep; 4]>,

    /// Label for distances past the last step.
    beyond: Closeness,
}

impl Default for ClosenessScale {
    fn default() -> Self {
        Self::ninja()
    }
}

impl ClosenessScale {
    /// Build a scale, checking monotonicity.
    pub fn new(steps: &[(u64, Closeness)], beyond: Closeness) -> Result<Self, ConfigError> {
        let scale = Self {
            steps: steps
                .iter()
                .map(|&(below, label)| ClosenessStep { below, label })
                .collect(),
            beyond,
        };
        scale.validate()?;
        Ok(scale)
    }

    /// Three bands: under 5, under 15, and everything further.
    #[must_use]
    pub fn ninja() -> Self {
        Self {
            steps: SmallVec::from_slice(&[
                ClosenessStep { below: 5, label: Closeness::BurningHot },
                ClosenessStep { below: 15, label: Closeness::Warm },
            ]),
            beyond: Closeness::IceCold,
        }
    }

    /// Four bands with thresholds at 5, 10 and 20.
    #[must_use]
    pub fn graded() -> Self {
        Self {
            steps: SmallVec::from_slice(&[
                ClosenessStep { below: 5, label: Closeness::BurningHot },
                ClosenessStep { below: 10, label: Closeness::Hot },
                ClosenessStep { below: 20, label: Closeness::Warm },
            ]),
            beyond: Closeness::IceCold,
        }
    }

    /// Label for a distance.
    #[must_use]
    pub fn classify(&self, distance: u64) -> Closeness {
        self.steps
            .iter()
            .find(|step| distance < step.below)
            .map_or(self.beyond, |step| step.label)
    }

    /// Steps in threshold order.
    #[must_use]
    pub fn steps(&self) -> &[ClosenessStep] {
        &self.steps
    }

    /// Label past the last step.
    #[must_use]
    pub fn beyond(&self) -> Closeness {
        self.beyond
    }

    /// Thresholds must strictly increase; labels must not get warmer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for pair in self.steps.windows(2) {
            if pair[1].below <= pair[0].below {
                return Err(ConfigError::ThresholdOrder {
                    previous: pair[0].below,
                    next: pair[1].below,
                });
            }
            if pair[1].label < pair[0].label {
                return Err(ConfigError::LabelOrder);
            }
        }
        if let Some(last) = self.steps.last() {
            if self.beyond < last.label {
                return Err(ConfigError::LabelOrder);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ninja_bands() {
        let scale = ClosenessScale::ninja();
        assert_eq!(scale.classify(0), Closeness::BurningHot);
        assert_eq!(scale.classify(4), Closeness::BurningHot);
        assert_eq!(scale.classify(5), Closeness::Warm);
        assert_eq!(scale.classify(14), Closeness::Warm);
        assert_eq!(scale.classify(15), Closeness::IceCold);
        assert_eq!(scale.classify(u64::MAX), Closeness::IceCold);
    }

    #[test]
    fn test_graded_bands() {
        let scale = ClosenessScale::graded();
        assert_eq!(scale.classify(4), Closeness::BurningHot);
        assert_eq!(scale.classify(9), Closeness::Hot);
        assert_eq!(scale.classify(19), Closeness::Warm);
        assert_eq!(scale.classify(20), Closeness::IceCold);
    }

    #[test]
    fn test_empty_scale_uses_beyond() {
        let scale = ClosenessScale::new(&[], Closeness::Cold).unwrap();
        assert_eq!(scale.classify(0), Closeness::Cold);
        assert_eq!(scale.classify(1000), Closeness::Cold);
    }

    #[test]
    fn test_rejects_unordered_thresholds() {
        let result = ClosenessScale::new(
            &[(10, Closeness::Hot), (10, Closeness::Warm)],
            Closeness::IceCold,
        );
        assert_eq!(
            result,
            Err(ConfigError::ThresholdOrder { previous: 10, next: 10 })
        );
    }

    #[test]
    fn test_rejects_warming_labels() {
        let result = ClosenessScale::new(
            &[(5, Closeness::Cold), (10, Closeness::Hot)],
            Closeness::IceCold,
        );
        assert_eq!(result, Err(ConfigError::LabelOrder));

        let result = ClosenessScale::new(&[(5, Closeness::Cold)], Closeness::Warm);
        assert_eq!(result, Err(ConfigError::LabelOrder));
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(ClosenessScale::ninja().validate().is_ok());
        assert!(ClosenessScale::graded().validate().is_ok());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Closeness::BurningHot.to_string(), "burning hot");
        assert_eq!(Closeness::IceCold.to_string(), "ice cold");
        assert!(Closeness::BurningHot < Closeness::IceCold);
    }
}
