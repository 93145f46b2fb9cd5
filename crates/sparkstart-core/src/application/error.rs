//! Application layer errors.
//!
//! These errors represent failures while orchestrating side effects, not
//! invalid input. Input errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during project creation and deletion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Target directory exists at create time.
    #[error("Project directory already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// Target directory is missing at delete time.
    #[error("Project directory not found: {path}")]
    NotFound { path: PathBuf },

    /// A required executable is not on PATH.
    #[error("Required tool '{tool}' was not found on PATH")]
    MissingTool { tool: String },

    /// No token in the project file, the environment, or from a prompt.
    #[error("No GitHub token available (checked {file} and ${env_var})")]
    MissingCredential {
        file: &'static str,
        env_var: &'static str,
    },

    /// Hosting API answered with a non-2xx status.
    #[error("GitHub API error {status}: {body}")]
    RemoteApi { status: u16, body: String },

    /// Hosting API could not be reached, or the call timed out.
    #[error("Could not reach GitHub: {reason}")]
    RemoteUnavailable { reason: String },

    /// An external command exited non-zero. `command` has secrets masked.
    #[error("Command failed: $ {command}\n{stderr}")]
    ProcessFailure { command: String, stderr: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An existing manifest could not be parsed for in-place amendment.
    #[error("Cannot amend {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },

    /// In-memory adapter lock was poisoned.
    #[error("Filesystem store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                format!(
                    "Or remove it first: sparkstart delete {}",
                    path.file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default()
                ),
            ],
            Self::NotFound { path } => vec![
                format!("Nothing to delete at {}", path.display()),
                "Run the command from the directory that contains the project".into(),
            ],
            Self::MissingTool { tool } => match tool.as_str() {
                "git" => vec![
                    "Install git: https://git-scm.com/downloads".into(),
                    "Then re-run the command in a fresh directory".into(),
                ],
                "python3" => vec![
                    "Install Python 3: https://www.python.org/downloads/".into(),
                    "Or re-run without --venv".into(),
                ],
                other => vec![format!("Install '{other}' and make sure it is on PATH")],
            },
            Self::MissingCredential { file, env_var } => vec![
                format!("Export a token: export {env_var}=<token>"),
                format!("Or write {env_var}=<token> into the project's {file}"),
                "Create one at https://github.com/settings/tokens (scopes: repo, delete_repo)"
                    .into(),
            ],
            Self::RemoteApi { status, .. } => match status {
                401 => vec!["The token was rejected; create a new one".into()],
                403 => vec!["The token lacks the 'repo' or 'delete_repo' scope".into()],
                404 => vec!["Repository not found for this account".into()],
                422 => vec!["A repository with this name probably already exists".into()],
                _ => vec!["Check https://www.githubstatus.com and try again".into()],
            },
            Self::RemoteUnavailable { .. } => vec![
                "Check your network connection".into(),
                "The local project was kept; push it manually once online".into(),
            ],
            Self::ProcessFailure { command, .. } => {
                let mut hints = vec!["See the command output above".to_string()];
                if command.starts_with("git commit") {
                    hints.push(
                        "Configure git: git config --global user.name/user.email".to_string(),
                    );
                }
                hints
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::InvalidManifest { path, .. } => vec![
                format!("Fix the syntax of {} and run again", path.display()),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Validation,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::MissingTool { .. } | Self::MissingCredential { .. } => {
                ErrorCategory::Configuration
            }
            Self::RemoteApi { .. }
            | Self::RemoteUnavailable { .. }
            | Self::ProcessFailure { .. } => ErrorCategory::External,
            Self::InvalidManifest { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
