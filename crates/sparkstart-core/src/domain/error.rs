// ============================================================================
// domain/error.rs - input and model errors
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors raised by the pure domain layer.
///
/// All errors are:
/// - Cloneable (the wizard keeps them around while re-prompting)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error(
        "Unsupported language '{language}'{}",
        artifact.as_ref().map(|a| format!(" for {a}")).unwrap_or_default()
    )]
    UnsupportedLanguage {
        language: String,
        /// Artifact kind being scaffolded when the registry had no entry.
        /// `None` when the language name itself is unknown.
        artifact: Option<String>,
        suggestion: Option<String>,
    },

    #[error("Template '{template}' is not available for {language}")]
    UnsupportedTemplate {
        template: String,
        language: String,
        suggestion: Option<String>,
    },

    #[error("Invalid remote URL '{url}': expected an https:// clone URL")]
    InvalidRemoteUrl { url: String },

    // ========================================================================
    // Project Structure Errors
    // ========================================================================
    #[error("Scaffold produced no files")]
    EmptyStructure,

    #[error("Duplicate path in scaffold output: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { .. } => vec![
                "Names start with a letter or underscore".into(),
                "Use only letters, digits, '-' and '_' (max 50 characters)".into(),
                "Reserved names: test, build, dist, env, venv".into(),
            ],
            Self::UnsupportedLanguage {
                suggestion,
                artifact,
                ..
            } => {
                let mut hints = Vec::new();
                if let Some(s) = suggestion {
                    hints.push(format!("Did you mean '{s}'?"));
                }
                if artifact.is_none() {
                    hints.push("Supported languages: python, rust, javascript, cpp".into());
                } else {
                    hints.push("Try again without the optional flag that failed".into());
                }
                hints
            }
            Self::UnsupportedTemplate { suggestion, .. } => {
                let mut hints = Vec::new();
                if let Some(s) = suggestion {
                    hints.push(format!("Did you mean '{s}'?"));
                }
                hints.push("Templates: pygame (python only)".into());
                hints.push("Try: sparkstart list".into());
                hints
            }
            Self::InvalidRemoteUrl { .. } => vec![
                "The hosting API returned an unexpected clone URL".into(),
                "Push manually with: git push -u origin main".into(),
            ],
            _ => vec!["This is likely a bug in a built-in template".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::UnsupportedLanguage {
                artifact: None, ..
            } => ErrorCategory::Validation,
            Self::UnsupportedLanguage { .. } | Self::UnsupportedTemplate { .. } => {
                ErrorCategory::Compatibility
            }
            Self::InvalidRemoteUrl { .. } => ErrorCategory::External,
            Self::EmptyStructure
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}
