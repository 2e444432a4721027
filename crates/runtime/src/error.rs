//! Errors surfaced by the session API.
//!
//! Wraps rule failures from xiuxian-core so clients can bubble them up with
//! one error type.
use thiserror::Error;
use xiuxian_core::{AttributeError, ErrorSeverity, GameError, ProgressionError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Attribute(#[from] AttributeError),

    #[error(transparent)]
    Progression(#[from] ProgressionError),

    #[error("no battle is running")]
    NoBattle,

    #[error("a battle is already running")]
    BattleInProgress,

    #[error("no living player can act")]
    NoPlayer,

    #[error("no experience reward for {0}")]
    UnknownExperienceSource(String),

    #[error("hook `{hook}` failed: {reason}")]
    Hook { hook: &'static str, reason: String },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Attribute(e) => e.severity(),
            Self::Progression(e) => e.severity(),
            Self::NoBattle | Self::BattleInProgress | Self::NoPlayer => ErrorSeverity::Recoverable,
            Self::UnknownExperienceSource(_) => ErrorSeverity::Validation,
            Self::Hook { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Attribute(e) => e.error_code(),
            Self::Progression(e) => e.error_code(),
            Self::NoBattle => "RUNTIME_NO_BATTLE",
            Self::BattleInProgress => "RUNTIME_BATTLE_IN_PROGRESS",
            Self::NoPlayer => "RUNTIME_NO_PLAYER",
            Self::UnknownExperienceSource(_) => "RUNTIME_UNKNOWN_EXPERIENCE_SOURCE",
            Self::Hook { .. } => "RUNTIME_HOOK_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use xiuxian_core::is_error_code;

    use super::*;

    #[test]
    fn codes_are_screaming_snake_case() {
        let errors = [
            RuntimeError::from(AttributeError::InvalidArgument("empty")),
            RuntimeError::from(ProgressionError::InvalidLevel(0)),
            RuntimeError::NoBattle,
            RuntimeError::BattleInProgress,
            RuntimeError::NoPlayer,
            RuntimeError::UnknownExperienceSource("task".into()),
            RuntimeError::Hook {
                hook: "reward",
                reason: "boom".into(),
            },
        ];
        for error in &errors {
            assert!(is_error_code(error.error_code()), "{}", error.error_code());
        }
        assert_eq!(errors[0].error_code(), "ATTRIBUTE_INVALID_ARGUMENT");
    }
}
