//! Core engine types: tiers, sessions, outcomes, RNG, configuration.
//!
//! This module contains the building blocks that do not depend on how a
//! game is rendered or where scores are stored.

pub mod rng;
pub mod config;
pub mod outcome;
pub mod session;

pub use rng::{GameRng, GameRngState};
pub use config::{TierId, DifficultyTier, TierSet, EngineConfig};
pub use outcome::{Direction, RejectReason, Outcome};
pub use session::{Session, SessionStatus, Progress, Pressure};
