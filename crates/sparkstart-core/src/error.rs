//! Unified error handling for sparkstart core.
//!
//! Domain and application errors are wrapped in [`SparkError`] so callers
//! deal with a single type, while still being able to match on the precise
//! failure (for exit codes, suggestions, or re-prompting).

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for sparkstart core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SparkError {
    /// Invalid user input (name, language, template).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Orchestration failures (filesystem, processes, remote API).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SparkError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in sparkstart".into(),
                "Re-run with -vv and include the log when reporting it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Whether the failure was caused by input that can be corrected and
    /// resubmitted (the wizard re-prompts on these).
    pub fn is_validation(&self) -> bool {
        matches!(self.category(), ErrorCategory::Validation)
    }
}

/// Error categories for UI display and exit-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed input, or a precondition the user can fix by choosing differently.
    Validation,
    /// Valid values that do not combine (template for the wrong language).
    Compatibility,
    NotFound,
    /// Host environment is missing something (tool, credential).
    Configuration,
    /// An external system (git, GitHub) reported a failure.
    External,
    Internal,
}

/// Convenient result type alias.
pub type SparkResult<T> = Result<T, SparkError>;
