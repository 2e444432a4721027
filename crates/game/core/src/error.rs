//! Common error infrastructure for xiuxian-core.
//!
//! Domain-specific errors (`AttributeError`, `ProgressionError`) live next to
//! the operations they reject. Every one of them is local and non-fatal: the
//! operation logs, leaves state untouched, and hands the error back.

/// Severity level of an error, used for categorization and logging priority.
///
/// - **Recoverable**: the caller may retry later (e.g. not enough experience yet)
/// - **Validation**: invalid input, should not retry without changes
/// - **Internal**: unexpected state inconsistency, indicates a bug
/// - **Fatal**: programmer error such as initializing with no definitions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug in the caller.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all xiuxian-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Return a stable SCREAMING_SNAKE_CASE code, prefixed by the module, for
///   metrics and tests
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant, e.g.
    /// `ATTRIBUTE_NOT_FOUND`.
    fn error_code(&self) -> &'static str;
}

/// Whether `code` is a well-formed [`GameError::error_code`].
pub fn is_error_code(code: &str) -> bool {
    !code.is_empty()
        && !code.starts_with('_')
        && !code.ends_with('_')
        && !code.contains("__")
        && code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
