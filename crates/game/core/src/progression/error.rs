use crate::error::{ErrorSeverity, GameError};

/// Errors reported by the level/experience engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    #[error("experience amount must not be negative (got {0})")]
    NegativeExperience(i64),

    #[error("level must be at least 1 (got {0})")]
    InvalidLevel(u32),

    #[error("invalid experience curve: {0}")]
    InvalidCurve(&'static str),
}

impl GameError for ProgressionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NegativeExperience(_) | Self::InvalidLevel(_) => ErrorSeverity::Validation,
            Self::InvalidCurve(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeExperience(_) => "PROGRESSION_NEGATIVE_EXPERIENCE",
            Self::InvalidLevel(_) => "PROGRESSION_INVALID_LEVEL",
            Self::InvalidCurve(_) => "PROGRESSION_INVALID_CURVE",
        }
    }
}
