//! Numerical Ninja game implementation.

use serde::Serialize;
use tracing::{debug, error};

use crate::core::{
    Direction, DifficultyTier, EngineConfig, GameRng, GameRngState, Outcome, Progress,
    RejectReason, Session, TierId,
};
use crate::error::ConfigError;
use crate::feedback::Feedback;
use crate::rules::GuessEngine;
use crate::scores::{BestScores, KeyValueStore};

/// Parse player input the lenient way: surrounding whitespace is ignored
/// and a leading integer prefix is enough (`"12abc"` is 12). A `0x` prefix
/// reads the digits as hexadecimal (`"0x10"` is 16).
///
/// Returns `None` when there is no leading integer or it overflows.
#[must_use]
pub fn parse_guess(input: &str) -> Option<i64> {
    let text = input.trim();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, body): (u32, &str) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };
    let digits = body
        .chars()
        .take_while(|c| c.is_digit(radix))
        .count();
    if digits == 0 {
        return None;
    }
    let magnitude = i64::from_str_radix(&body[..digits], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// One entry of the guess history as shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub value: i64,
    /// `None` for the winning guess.
    pub direction: Option<Direction>,
}

/// Everything a renderer needs to draw the current game.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameView {
    pub tier: TierId,
    pub min_value: i64,
    pub max_value: i64,
    pub lower_bound: i64,
    pub upper_bound: i64,
    pub progress: Progress,
    /// Newest first.
    pub history: Vec<HistoryEntry>,
    pub best_score: Option<u32>,
    pub feedback: Feedback,
    pub finished: bool,
}

/// A full game: tier selection, the live session, and persisted best scores.
///
/// ## Example
///
/// ```
/// use guess_engine::games::ninja::NinjaGame;
/// use guess_engine::scores::MemoryStore;
/// use guess_engine::core::Outcome;
///
/// let mut game = NinjaGame::with_defaults(MemoryStore::new(), 42).unwrap();
/// let secret = game.session().secret();
///
/// let outcome = game.submit(&secret.to_string());
/// assert_eq!(outcome, Outcome::Won { attempts_used: 1 });
/// assert_eq!(game.best_score(), Some(1));
/// ```
pub struct NinjaGame<S: KeyValueStore> {
    config: EngineConfig,
    engine: GuessEngine,
    rng: GameRng,
    store: S,
    best_scores: BestScores,
    session: Session,
    feedback: Feedback,
}

impl<S: KeyValueStore> NinjaGame<S> {
    /// Start a game whose secrets are drawn from `seed`.
    pub fn new(config: EngineConfig, store: S, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, store, GameRng::new(seed))
    }

    /// Start a game seeded from the operating system.
    pub fn unseeded(config: EngineConfig, store: S) -> Result<Self, ConfigError> {
        Self::with_rng(config, store, GameRng::from_entropy())
    }

    /// Continue drawing secrets from a state captured with `rng_state`.
    ///
    /// The first session gets the same secret the captured game would
    /// have drawn next.
    pub fn resume(
        config: EngineConfig,
        store: S,
        state: &GameRngState,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(config, store, GameRng::from_state(state))
    }

    /// Validate `config`, load best scores from `store`, and start a game
    /// on the default tier.
    pub fn with_rng(config: EngineConfig, store: S, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let engine = GuessEngine::from_config(&config);
        let best_scores = BestScores::load(&store, &config.store_key);
        let tier = config.tier(&config.default_tier)?;
        let session = engine.start_session(tier, &mut rng, best_scores.get(&tier.id));

        Ok(Self {
            config,
            engine,
            rng,
            store,
            best_scores,
            session,
            feedback: Feedback::prompt(),
        })
    }

    /// Default tiers and closeness scale.
    pub fn with_defaults(store: S, seed: u64) -> Result<Self, ConfigError> {
        Self::new(EngineConfig::default(), store, seed)
    }

    /// Switch to `tier` and start a fresh session on it.
    pub fn start_new_game(&mut self, tier: &TierId) -> Result<(), ConfigError> {
        let tier = self.config.tier(tier)?.clone();
        debug!(tier = %tier.id, "Tier selected");
        self.begin(&tier);
        Ok(())
    }

    /// Start a fresh session on the current tier.
    pub fn restart(&mut self) {
        let tier = self.session.tier().clone();
        self.begin(&tier);
    }

    fn begin(&mut self, tier: &DifficultyTier) {
        self.session =
            self.engine
                .start_session(tier, &mut self.rng, self.best_scores.get(&tier.id));
        self.feedback = Feedback::prompt();
    }

    /// Submit raw player input.
    ///
    /// Input without a leading integer is rejected as out of range, unless
    /// the session is already over.
    pub fn submit(&mut self, input: &str) -> Outcome {
        if self.session.is_terminal() {
            return self.conclude(Outcome::rejected(RejectReason::SessionOver));
        }
        match parse_guess(input) {
            Some(guess) => self.guess(guess),
            None => self.conclude(Outcome::rejected(RejectReason::OutOfRange)),
        }
    }

    /// Submit an already-parsed guess.
    pub fn guess(&mut self, guess: i64) -> Outcome {
        let outcome = self.engine.evaluate(&mut self.session, guess);

        if let Outcome::Won { attempts_used } = outcome {
            let tier = self.session.tier().id.clone();
            if self.best_scores.record_win(&tier, attempts_used) {
                let saved =
                    self.best_scores
                        .save(&mut self.store, &self.config.store_key, &self.config.tiers);
                if let Err(e) = saved {
                    error!(tier = %tier, error = %e, "Failed to persist best score");
                }
            }
        }

        self.conclude(outcome)
    }

    fn conclude(&mut self, outcome: Outcome) -> Outcome {
        self.feedback = Feedback::for_outcome(&outcome, &self.session);
        outcome
    }

    /// The live session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current tier.
    #[must_use]
    pub fn tier(&self) -> &TierId {
        &self.session.tier().id
    }

    /// Feedback for the latest submission.
    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Best score for the current tier.
    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.best_scores.get(self.tier())
    }

    #[must_use]
    pub fn best_scores(&self) -> &BestScores {
        &self.best_scores
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// RNG position, for `resume`.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the store, e.g. to reopen a game on it later.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> GameView {
        let session = &self.session;
        GameView {
            tier: session.tier().id.clone(),
            min_value: session.tier().min_value,
            max_value: session.tier().max_value,
            lower_bound: session.lower_bound(),
            upper_bound: session.upper_bound(),
            progress: session.progress(),
            history: session
                .history()
                .iter()
                .rev()
                .map(|&value| HistoryEntry {
                    value,
                    direction: session.direction_of(value),
                })
                .collect(),
            best_score: self.best_score(),
            feedback: self.feedback.clone(),
            finished: session.is_terminal(),
        }
    }
}
