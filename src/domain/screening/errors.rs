//! Error types for the screening conversation.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Reasons a turn or control signal is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreeningError {
    #[error("The conversation has ended. Reset to start over.")]
    ConversationEnded,

    #[error("Message cannot be empty")]
    EmptyInput,

    #[error("Invalid stage change: {0}")]
    InvalidTransition(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ended_error_mentions_reset() {
        assert!(ScreeningError::ConversationEnded.to_string().contains("Reset"));
    }

    #[test]
    fn wraps_validation_errors() {
        let err: ScreeningError = ValidationError::invalid_format("state_transition", "nope").into();
        assert!(matches!(err, ScreeningError::InvalidTransition(_)));
    }
}
