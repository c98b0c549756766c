//! Player-facing feedback text for outcomes.

use serde::Serialize;

use crate::core::outcome::{Direction, Outcome, RejectReason};
use crate::core::session::Session;

use super::closeness::Closeness;

/// Styling hint for a feedback message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FeedbackKind {
    Neutral,
    TooHigh,
    TooLow,
    Success,
    Failure,
}

/// Rendered feedback: message text plus a styling hint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    /// Shown before the first guess of a session.
    #[must_use]
    pub fn prompt() -> Self {
        Self {
            kind: FeedbackKind::Neutral,
            message: "Guess the number to begin!".to_string(),
        }
    }

    /// Render `outcome`, which was produced by evaluating against `session`.
    #[must_use]
    pub fn for_outcome(outcome: &Outcome, session: &Session) -> Self {
        match *outcome {
            Outcome::Rejected { reason } => {
                let message = match reason {
                    RejectReason::OutOfRange => format!(
                        "Enter a number between {} and {}",
                        session.tier().min_value,
                        session.tier().max_value
                    ),
                    RejectReason::AlreadyTried => "You already tried that!".to_string(),
                    RejectReason::SessionOver => "The game is over. Start a new one!".to_string(),
                };
                Self {
                    kind: FeedbackKind::Neutral,
                    message,
                }
            }
            Outcome::Incorrect {
                direction,
                closeness,
                ..
            } => {
                let word = match direction {
                    Direction::Lower => "high",
                    Direction::Higher => "low",
                };
                let message = match closeness {
                    Closeness::BurningHot | Closeness::Hot => format!("Just a bit too {}!", word),
                    Closeness::Warm | Closeness::Cold => format!("{}!", capitalize(word)),
                    Closeness::IceCold => format!("Way too {}!", word),
                };
                let kind = match direction {
                    Direction::Lower => FeedbackKind::TooHigh,
                    Direction::Higher => FeedbackKind::TooLow,
                };
                Self { kind, message }
            }
            Outcome::Won { .. } => Self {
                kind: FeedbackKind::Success,
                message: format!("Victory! It was {}", session.secret()),
            },
            Outcome::Lost { secret } => Self {
                kind: FeedbackKind::Failure,
                message: format!("Defeat! The number was {}", secret),
            },
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
