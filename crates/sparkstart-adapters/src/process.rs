//! External process adapter.
//!
//! Runs git and python3 to completion with captured output. Secret
//! arguments (the authenticated remote URL) are passed through to the
//! child but scrubbed from anything that ends up in an error.

use std::io;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use sparkstart_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, CommandSpec},
    },
    error::SparkResult,
};

/// [`CommandRunner`] backed by `std::process::Command` and a PATH lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn run(&self, command: &CommandSpec, cwd: &Path) -> SparkResult<String> {
        debug!(%command, cwd = %cwd.display(), "Running");

        let output = Command::new(command.program())
            .args(command.exposed_args())
            .current_dir(cwd)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ApplicationError::MissingTool {
                    tool: command.program().to_string(),
                },
                _ => ApplicationError::ProcessFailure {
                    command: command.to_string(),
                    stderr: e.to_string(),
                },
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            return Err(ApplicationError::ProcessFailure {
                command: command.to_string(),
                stderr: if stderr.is_empty() {
                    format!("command failed ({})", output.status)
                } else {
                    command.scrub(stderr)
                },
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use sparkstart_core::error::SparkError;
    use tempfile::TempDir;

    #[test]
    fn captures_stdout() {
        let tmp = TempDir::new().unwrap();
        let out = SystemCommandRunner
            .run(&CommandSpec::new("sh").args(["-c", "echo hi"]), tmp.path())
            .unwrap();
        assert_eq!(out.trim(), "hi");
    }

    #[test]
    fn unknown_program_is_missing_tool() {
        let tmp = TempDir::new().unwrap();
        let err = SystemCommandRunner
            .run(&CommandSpec::new("sparkstart-no-such-tool"), tmp.path())
            .unwrap_err();
        assert_eq!(
            err,
            SparkError::Application(ApplicationError::MissingTool {
                tool: "sparkstart-no-such-tool".into()
            })
        );
        assert!(!SystemCommandRunner.is_available("sparkstart-no-such-tool"));
    }

    #[test]
    fn failure_scrubs_secret_from_stderr() {
        let tmp = TempDir::new().unwrap();
        let cmd = CommandSpec::new("sh")
            .args(["-c", "echo \"denied for $0\" >&2; exit 3"])
            .secret_arg("https://tok@h/r", "https://***@h/r");

        let err = SystemCommandRunner.run(&cmd, tmp.path()).unwrap_err();
        match err {
            SparkError::Application(ApplicationError::ProcessFailure { command, stderr }) => {
                assert!(!command.contains("tok@"));
                assert_eq!(stderr, "denied for https://***@h/r");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
