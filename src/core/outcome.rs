//! Outcome of evaluating one guess.
//!
//! Every call to `GuessEngine::evaluate` yields exactly one `Outcome`:
//! - `Rejected`: the guess was not accepted; the session is unchanged
//! - `Incorrect`: accepted, wrong, and attempts remain
//! - `Won` / `Lost`: accepted and the session is now terminal

use serde::{Deserialize, Serialize};

use crate::feedback::Closeness;

/// Where the secret lies relative to a wrong guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// The guess was too low.
    Higher,
    /// The guess was too high.
    Lower,
}

impl Direction {
    /// Direction from `guess` towards `secret`. `None` when they are equal.
    #[must_use]
    pub fn towards(guess: i64, secret: i64) -> Option<Self> {
        match guess.cmp(&secret) {
            std::cmp::Ordering::Less => Some(Direction::Higher),
            std::cmp::Ordering::Greater => Some(Direction::Lower),
            std::cmp::Ordering::Equal => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Higher => "higher",
            Direction::Lower => "lower",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a guess was not accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// Outside the tier's range, or not a number at all.
    OutOfRange,
    /// Already in the session history.
    AlreadyTried,
    /// The session is won or lost.
    SessionOver,
}

/// Result of one evaluated guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Rejected {
        reason: RejectReason,
    },
    Incorrect {
        direction: Direction,
        /// `|guess - secret|`
        magnitude: u64,
        closeness: Closeness,
    },
    Won {
        attempts_used: u32,
    },
    Lost {
        secret: i64,
    },
}

impl Outcome {
    #[must_use]
    pub fn rejected(reason: RejectReason) -> Self {
        Outcome::Rejected { reason }
    }

    /// Did this guess end the session?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Won { .. } | Outcome::Lost { .. })
    }

    /// Was the guess counted as an attempt?
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Outcome::Rejected { .. })
    }

    /// Rejection reason, if any.
    #[must_use]
    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            Outcome::Rejected { reason } => Some(*reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_towards() {
        assert_eq!(Direction::towards(50, 42), Some(Direction::Lower));
        assert_eq!(Direction::towards(10, 42), Some(Direction::Higher));
        assert_eq!(Direction::towards(42, 42), None);
        assert_eq!(Direction::Lower.to_string(), "lower");
    }

    #[test]
    fn test_outcome_classification() {
        let rejected = Outcome::rejected(RejectReason::AlreadyTried);
        assert!(!rejected.is_accepted());
        assert!(!rejected.is_terminal());
        assert_eq!(rejected.reject_reason(), Some(RejectReason::AlreadyTried));

        let incorrect = Outcome::Incorrect {
            direction: Direction::Higher,
            magnitude: 3,
            closeness: Closeness::BurningHot,
        };
        assert!(incorrect.is_accepted());
        assert!(!incorrect.is_terminal());
        assert_eq!(incorrect.reject_reason(), None);

        assert!(Outcome::Won { attempts_used: 1 }.is_terminal());
        assert!(Outcome::Lost { secret: 7 }.is_terminal());
    }

    #[test]
    fn test_serialization() {
        let outcome = Outcome::Incorrect {
            direction: Direction::Lower,
            magnitude: 8,
            closeness: Closeness::Warm,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}
