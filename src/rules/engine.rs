//! Guess engine: session creation and guess evaluation.
//!
//! The engine holds only configuration. All mutable state lives in the
//! caller-owned `Session`, so evaluation is a pure function of
//! `(session, guess)` apart from the session update itself.

use tracing::{debug, info};

use crate::core::config::{DifficultyTier, EngineConfig};
use crate::core::outcome::{Direction, Outcome, RejectReason};
use crate::core::rng::GameRng;
use crate::core::session::{Session, SessionStatus};
use crate::feedback::ClosenessScale;

/// Does a win in `attempts` beat the `prior` best?
///
/// No prior best always counts as an improvement.
#[must_use]
pub fn improves_best(prior: Option<u32>, attempts: u32) -> bool {
    prior.map_or(true, |best| attempts < best)
}

/// Guess evaluation rules.
///
/// ## State machine
///
/// `InProgress -> {InProgress, Won, Lost}`. A terminal session rejects
/// every further guess; only a new `start_session` replaces it.
#[derive(Clone, Debug, Default)]
pub struct GuessEngine {
    closeness: ClosenessScale,
}

impl GuessEngine {
    /// Create an engine with the given closeness scale.
    #[must_use]
    pub fn new(closeness: ClosenessScale) -> Self {
        Self { closeness }
    }

    /// Create an engine from a full configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.closeness.clone())
    }

    #[must_use]
    pub fn closeness(&self) -> &ClosenessScale {
        &self.closeness
    }

    /// Start a session with a secret drawn uniformly from the tier's range.
    ///
    /// `best_score` is the stored best for this tier, if any.
    pub fn start_session(
        &self,
        tier: &DifficultyTier,
        rng: &mut GameRng,
        best_score: Option<u32>,
    ) -> Session {
        let secret = rng.gen_inclusive(tier.min_value, tier.max_value);
        debug!(
            tier = %tier.id,
            min = tier.min_value,
            max = tier.max_value,
            attempts = tier.attempt_limit,
            "Session started"
        );
        Session::with_secret(tier.clone(), secret, best_score)
    }

    /// Evaluate one guess and update the session.
    ///
    /// Rejected guesses leave the session untouched. Accepted guesses
    /// consume one attempt, join the history, and narrow the bounds.
    pub fn evaluate(&self, session: &mut Session, guess: i64) -> Outcome {
        if session.is_terminal() {
            return Outcome::rejected(RejectReason::SessionOver);
        }
        if !session.tier.contains(guess) {
            return Outcome::rejected(RejectReason::OutOfRange);
        }
        if session.has_tried(guess) {
            return Outcome::rejected(RejectReason::AlreadyTried);
        }

        session.attempts_used += 1;
        session.history.push_back(guess);

        let Some(direction) = Direction::towards(guess, session.secret) else {
            session.status = SessionStatus::Won;
            if improves_best(session.best_score, session.attempts_used) {
                session.best_score = Some(session.attempts_used);
            }
            info!(
                tier = %session.tier.id,
                attempts = session.attempts_used,
                "Session won"
            );
            return Outcome::Won {
                attempts_used: session.attempts_used,
            };
        };

        // Bounds narrow on every miss, including the final one.
        match direction {
            Direction::Lower => session.upper_bound = session.upper_bound.min(guess - 1),
            Direction::Higher => session.lower_bound = session.lower_bound.max(guess + 1),
        }

        if session.attempts_used >= session.tier.attempt_limit {
            session.status = SessionStatus::Lost;
            info!(
                tier = %session.tier.id,
                secret = session.secret,
                "Session lost"
            );
            return Outcome::Lost {
                secret: session.secret,
            };
        }

        let magnitude = guess.abs_diff(session.secret);
        Outcome::Incorrect {
            direction,
            magnitude,
            closeness: self.closeness.classify(magnitude),
        }
    }
}
