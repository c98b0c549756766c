//! Session: one play-through from first guess to win or loss.
//!
//! A session is owned by the caller and mutated only through
//! `GuessEngine::evaluate`. Invariants maintained by the engine:
//! - `lower_bound <= secret <= upper_bound`
//! - `attempts_used <= attempt_limit`
//! - `history` holds distinct values, all inside the tier's range
//!
//! History uses `im::Vector` so a session can be cloned in O(1) for
//! display snapshots or undo stacks.

use im::Vector;
use serde::Serialize;

use super::config::DifficultyTier;
use super::outcome::Direction;

/// Lifecycle state. `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != SessionStatus::InProgress
    }
}

/// How close the session is to running out of attempts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Pressure {
    Calm,
    Warning,
    Danger,
}

/// Attempt usage summary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Progress {
    pub attempts_used: u32,
    pub attempt_limit: u32,
    pub remaining: u32,
    /// `attempts_used / attempt_limit`, in `[0, 1]`.
    pub fraction: f64,
}

impl Progress {
    /// Over 80% used is `Danger`, over 50% is `Warning`.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        if self.fraction > 0.8 {
            Pressure::Danger
        } else if self.fraction > 0.5 {
            Pressure::Warning
        } else {
            Pressure::Calm
        }
    }
}

/// Mutable state of one play-through.
#[derive(Clone, Debug, Serialize)]
pub struct Session {
    pub(crate) tier: DifficultyTier,
    pub(crate) secret: i64,
    pub(crate) attempts_used: u32,
    pub(crate) history: Vector<i64>,
    pub(crate) lower_bound: i64,
    pub(crate) upper_bound: i64,
    pub(crate) best_score: Option<u32>,
    pub(crate) status: SessionStatus,
}

impl Session {
    /// Create a session with a known secret.
    ///
    /// `GuessEngine::start_session` draws the secret at random; this
    /// constructor is for replays and tests.
    ///
    /// Panics if `secret` is outside the tier's range or the tier has a
    /// zero attempt limit.
    #[must_use]
    pub fn with_secret(tier: DifficultyTier, secret: i64, best_score: Option<u32>) -> Self {
        assert!(
            tier.attempt_limit > 0,
            "Tier '{}' has a zero attempt limit",
            tier.id
        );
        assert!(
            tier.contains(secret),
            "Secret {} outside tier range {}..={}",
            secret,
            tier.min_value,
            tier.max_value
        );

        Self {
            lower_bound: tier.min_value,
            upper_bound: tier.max_value,
            tier,
            secret,
            attempts_used: 0,
            history: Vector::new(),
            best_score,
            status: SessionStatus::InProgress,
        }
    }

    /// The tier this session was started from.
    #[must_use]
    pub fn tier(&self) -> &DifficultyTier {
        &self.tier
    }

    /// The secret value.
    ///
    /// Renderers should only reveal this once the session is terminal.
    #[must_use]
    pub fn secret(&self) -> i64 {
        self.secret
    }

    #[must_use]
    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    #[must_use]
    pub fn attempt_limit(&self) -> u32 {
        self.tier.attempt_limit
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.tier.attempt_limit.saturating_sub(self.attempts_used)
    }

    /// Accepted guesses in submission order.
    #[must_use]
    pub fn history(&self) -> &Vector<i64> {
        &self.history
    }

    /// Has `guess` already been accepted?
    #[must_use]
    pub fn has_tried(&self, guess: i64) -> bool {
        self.history.contains(&guess)
    }

    /// Smallest value the secret can still be.
    #[must_use]
    pub fn lower_bound(&self) -> i64 {
        self.lower_bound
    }

    /// Largest value the secret can still be.
    #[must_use]
    pub fn upper_bound(&self) -> i64 {
        self.upper_bound
    }

    /// Best score for this tier, including a win in this session.
    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Attempt usage summary.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            attempts_used: self.attempts_used,
            attempt_limit: self.tier.attempt_limit,
            remaining: self.remaining(),
            fraction: f64::from(self.attempts_used) / f64::from(self.tier.attempt_limit),
        }
    }

    /// Direction hint for a past guess. `None` for the winning guess.
    #[must_use]
    pub fn direction_of(&self, guess: i64) -> Option<Direction> {
        Direction::towards(guess, self.secret)
    }
}
