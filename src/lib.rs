//! # guess-engine
//!
//! A number-guessing game engine: a secret integer in a range, a fixed
//! attempt budget, and "hotter/colder" feedback that narrows the range
//! after every miss.
//!
//! ## Design Principles
//!
//! 1. **Caller-Owned State**: A `Session` is a plain value. The engine
//!    holds configuration only and mutates the session passed to it.
//!
//! 2. **No I/O in the Core**: Rendering is the caller's job and
//!    persistence goes through an injected `KeyValueStore`.
//!
//! 3. **Configuration Over Convention**: Tiers and the closeness scale are
//!    configured via `EngineConfig`; the classic easy/medium/hard setup is
//!    just the default.
//!
//! ## Modules
//!
//! - `core`: Tiers, sessions, outcomes, RNG, configuration
//! - `rules`: `GuessEngine`, the session state machine
//! - `feedback`: Closeness scale and player-facing messages
//! - `scores`: Best scores and the key-value store they persist to
//! - `games`: Complete games wiring everything together
//! - `error`: Configuration and store errors

pub mod core;
pub mod error;
pub mod feedback;
pub mod rules;
pub mod scores;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState,
    TierId, DifficultyTier, TierSet, EngineConfig,
    Direction, RejectReason, Outcome,
    Session, SessionStatus, Progress, Pressure,
};

pub use crate::error::{ConfigError, StoreError};

pub use crate::feedback::{Closeness, ClosenessScale, Feedback, FeedbackKind};

pub use crate::rules::GuessEngine;

pub use crate::scores::{BestScores, KeyValueStore, MemoryStore, FileStore};

pub use crate::games::ninja::{NinjaGame, GameView};
