//! Ready-made games built on the engine.

pub mod ninja;
