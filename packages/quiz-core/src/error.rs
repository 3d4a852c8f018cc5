use thiserror::Error;

use crate::session::Phase;

/// Rejected session transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot {action} while in phase {phase:?}")]
    InvalidTransition { action: &'static str, phase: Phase },
    #[error("player name must not be empty")]
    EmptyName,
    #[error("the current question was already answered")]
    AlreadyAnswered,
    #[error("the current question has not been answered yet")]
    AwaitingAnswer,
    #[error("{0} is not one of the offered options")]
    NotAnOption(u32),
}

impl SessionError {
    pub(crate) fn invalid(action: &'static str, phase: Phase) -> Self {
        Self::InvalidTransition { action, phase }
    }
}
