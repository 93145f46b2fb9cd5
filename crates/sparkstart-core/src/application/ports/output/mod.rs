//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the orchestrator needs from external systems.
//! Every method is blocking; a call fully completes before the next step.

mod command;

pub use command::CommandSpec;

use crate::domain::{AccessToken, ArtifactKind, CloneUrl, Language, TemplateFile};
use crate::error::SparkResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sparkstart_adapters::filesystem::LocalFilesystem` (production)
/// - `sparkstart_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a single directory; its parent must exist.
    ///
    /// Fails with `ApplicationError::AlreadyExists` if the path exists.
    fn create_dir(&self, path: &Path) -> SparkResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SparkResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> SparkResult<()>;

    /// Read a UTF-8 file. `Ok(None)` when it does not exist.
    fn read_file(&self, path: &Path) -> SparkResult<Option<String>>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> SparkResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> SparkResult<()>;
}

/// Port for running external programs.
///
/// Implemented by `sparkstart_adapters::process::SystemCommandRunner`.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Whether `program` resolves on PATH.
    fn is_available(&self, program: &str) -> bool;

    /// Run to completion in `cwd`, returning captured stdout.
    ///
    /// A non-zero exit fails with `ApplicationError::ProcessFailure` carrying
    /// the masked command line and the captured stderr.
    fn run(&self, command: &CommandSpec, cwd: &Path) -> SparkResult<String>;
}

/// Port for the hosted Git repository API.
///
/// Implemented by `sparkstart_adapters::github::GitHubClient`. Any non-2xx
/// answer is `ApplicationError::RemoteApi`; nothing is retried.
#[cfg_attr(test, mockall::automock)]
pub trait RemoteRepository: Send + Sync {
    /// Login of the identity owning `token`.
    fn authenticated_user(&self, token: &AccessToken) -> SparkResult<String>;

    /// Create a public repository and return its HTTPS clone URL.
    fn create_repository(&self, name: &str, token: &AccessToken) -> SparkResult<CloneUrl>;

    /// Delete `owner/name`. Deleting a missing repository is an error.
    fn delete_repository(&self, owner: &str, name: &str, token: &AccessToken) -> SparkResult<()>;
}

/// Port for the fixed set of template bodies.
///
/// Implemented by `sparkstart_adapters::templates::BuiltinTemplates`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRegistry: Send + Sync {
    /// Files registered for `(kind, language)`, or `None` when that
    /// combination has no templates.
    fn files(&self, kind: ArtifactKind, language: Language) -> Option<&'static [TemplateFile]>;
}

/// User-facing progress channel.
///
/// The orchestrator never prints; it reports through this port. The CLI's
/// `OutputManager` implements it with colors and symbols.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Interactive token entry. Supplying one to the orchestrator is what makes
/// a run interactive; without it, token resolution fails fast.
#[cfg_attr(test, mockall::automock)]
pub trait TokenPrompt: Send + Sync {
    /// Ask the user for a token. `creation_url` pre-fills a new-token form.
    ///
    /// `Ok(None)` means the user gave nothing.
    fn prompt_token(
        &self,
        project_name: &str,
        creation_url: &str,
    ) -> SparkResult<Option<AccessToken>>;
}

/// Reporter that forwards to `tracing`; for library use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        tracing::info!(target: "sparkstart::report", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "sparkstart::report", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "sparkstart::report", "{message}");
    }
}
