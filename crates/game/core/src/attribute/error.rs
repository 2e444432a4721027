use crate::error::{ErrorSeverity, GameError};

use super::{AttributeKind, ValueKind};

/// Errors reported by [`AttributeStore`](super::AttributeStore).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AttributeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("no attribute definition for `{id}`{}", type_suffix(.kind))]
    NotFound {
        id: String,
        kind: Option<AttributeKind>,
    },

    #[error("cannot add {delta} to {current} value of `{key}`")]
    IncompatibleOperation {
        key: String,
        current: ValueKind,
        delta: ValueKind,
    },
}

fn type_suffix(kind: &Option<AttributeKind>) -> String {
    kind.map(|kind| format!(" with type {kind}"))
        .unwrap_or_default()
}

impl AttributeError {
    pub(crate) fn not_found(id: &str, kind: Option<AttributeKind>) -> Self {
        Self::NotFound {
            id: id.to_owned(),
            kind,
        }
    }
}

impl GameError for AttributeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidArgument(_) => ErrorSeverity::Fatal,
            Self::NotFound { .. } | Self::IncompatibleOperation { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "ATTRIBUTE_INVALID_ARGUMENT",
            Self::NotFound { .. } => "ATTRIBUTE_NOT_FOUND",
            Self::IncompatibleOperation { .. } => "ATTRIBUTE_INCOMPATIBLE_OPERATION",
        }
    }
}
