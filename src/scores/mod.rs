//! Best-score persistence.
//!
//! `BestScores` is the per-tier ledger; `KeyValueStore` is the injected
//! storage it is read from at startup and written to on a qualifying win.

pub mod best;
pub mod store;

pub use best::BestScores;
pub use store::{FileStore, KeyValueStore, MemoryStore};
