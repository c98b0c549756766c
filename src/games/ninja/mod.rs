//! "Numerical Ninja": the classic three-tier guessing game.
//!
//! - Easy 1-50 with 12 attempts, medium 1-100 with 10, hard 1-200 with 8
//! - Each miss says higher or lower, how close, and narrows the range
//! - The fewest attempts to win is remembered per tier
//!
//! Everything the player sees comes from `NinjaGame::view`; drawing it is
//! up to the caller.

mod game;

pub use game::{parse_guess, GameView, HistoryEntry, NinjaGame};
