//! Feedback for wrong guesses: closeness labels and message text.

pub mod closeness;
pub mod message;

pub use closeness::{Closeness, ClosenessScale, ClosenessStep};
pub use message::{Feedback, FeedbackKind};
