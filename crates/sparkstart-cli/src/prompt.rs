//! Terminal prompts.
//!
//! Everything here needs both a TTY on stdin and the `interactive` feature.
//! Without the feature the functions still exist and report that prompting
//! is unavailable, so callers never need their own `cfg`.

use std::io::IsTerminal;

use sparkstart_core::application::ports::TokenPrompt;

use crate::error::CliResult;
use crate::output::OutputManager;

/// Whether prompts can be shown at all.
pub fn is_interactive() -> bool {
    cfg!(feature = "interactive") && std::io::stdin().is_terminal()
}

/// A token prompt for the orchestrator, when the session allows one.
pub fn token_prompt(output: &OutputManager) -> Option<Box<dyn TokenPrompt>> {
    if !is_interactive() {
        return None;
    }
    interactive::token_prompt(output)
}

/// Ask a yes/no question.
pub fn confirm(output: &OutputManager, question: &str, default: bool) -> CliResult<bool> {
    interactive::confirm(output, question, default)
}

#[cfg(feature = "interactive")]
pub(crate) mod interactive {
    use dialoguer::{Confirm, Password};
    use tracing::warn;

    use sparkstart_core::application::ports::TokenPrompt;
    use sparkstart_core::domain::AccessToken;
    use sparkstart_core::error::SparkResult;

    use crate::error::{CliError, CliResult};
    use crate::output::OutputManager;

    /// Reads a GitHub token with hidden input.
    pub struct DialoguerTokenPrompt {
        output: OutputManager,
    }

    impl TokenPrompt for DialoguerTokenPrompt {
        fn prompt_token(
            &self,
            project_name: &str,
            creation_url: &str,
        ) -> SparkResult<Option<AccessToken>> {
            let answer = self.output.suspend(|| {
                let _ = self.output.warning(&format!(
                    "No GitHub token found for '{project_name}'."
                ));
                let _ = self.output.print(&format!(
                    "  Create one (scopes repo, delete_repo, user):\n  {creation_url}"
                ));
                Password::new()
                    .with_prompt("GitHub token")
                    .allow_empty_password(true)
                    .interact()
            });

            match answer {
                Ok(raw) => Ok(AccessToken::new(raw)),
                Err(e) => {
                    // Treated as "no answer": resolution then fails with MissingCredential.
                    warn!(error = %e, "Could not read token from terminal");
                    Ok(None)
                }
            }
        }
    }

    pub fn token_prompt(output: &OutputManager) -> Option<Box<dyn TokenPrompt>> {
        Some(Box::new(DialoguerTokenPrompt {
            output: output.clone(),
        }))
    }

    pub fn confirm(output: &OutputManager, question: &str, default: bool) -> CliResult<bool> {
        output
            .suspend(|| {
                Confirm::new()
                    .with_prompt(question)
                    .default(default)
                    .interact()
            })
            .map_err(prompt_error)
    }

    pub fn prompt_error(err: dialoguer::Error) -> CliError {
        CliError::IoError {
            message: format!("failed to read from terminal: {err}"),
            source: std::io::Error::other(err),
        }
    }
}

#[cfg(not(feature = "interactive"))]
pub(crate) mod interactive {
    use sparkstart_core::application::ports::TokenPrompt;

    use crate::error::{CliError, CliResult};
    use crate::output::OutputManager;

    pub fn token_prompt(_output: &OutputManager) -> Option<Box<dyn TokenPrompt>> {
        None
    }

    pub fn confirm(_output: &OutputManager, _question: &str, _default: bool) -> CliResult<bool> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactivity_requires_the_feature() {
        if !cfg!(feature = "interactive") {
            assert!(!is_interactive());
        }
    }
}
