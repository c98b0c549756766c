//! Game rules.
//!
//! `GuessEngine` defines:
//! - How a session starts (secret draw, initial bounds)
//! - How a guess is validated and classified
//! - When the session ends and how the best score moves
//!
//! Rendering and persistence stay with the caller.

pub mod engine;

pub use engine::{improves_best, GuessEngine};
