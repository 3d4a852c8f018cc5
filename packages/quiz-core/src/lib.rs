//! Pure game logic for Aventura Matemática.
//!
//! Nothing in this crate touches a terminal, a network, or a clock. The
//! presentation adapter drives a [`GameSession`] and renders what it returns;
//! the delays between screens are exported as constants for the adapter to
//! honour.

pub mod error;
pub mod generator;
pub mod problem;
pub mod recent;
pub mod rules;
pub mod session;

pub use error::SessionError;
pub use generator::{AnswerOptions, ProblemGenerator, Round};
pub use problem::{Operator, Problem, Signature};
pub use recent::RecentQuestionLog;
pub use rules::{level_label, Level, Stars, TOTAL_QUESTIONS};
pub use session::{
    Advance, AnswerFeedback, GameSession, GameSummary, Phase, PlayerResult, Progress,
    FEEDBACK_DELAY, START_TRANSITION_DELAY,
};
