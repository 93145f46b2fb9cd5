//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core calls and render the
//! result. No business logic lives here.

use std::path::PathBuf;

use sparkstart_adapters::{BuiltinTemplates, GitHubClient, LocalFilesystem, SystemCommandRunner};
use sparkstart_core::application::ProjectService;

use crate::config::AppConfig;
use crate::error::{CliResult, IntoCli};
use crate::output::OutputManager;
use crate::prompt;

pub mod completions;
pub mod config;
pub mod delete;
pub mod list;
pub mod new;

/// Wire the production adapters into a [`ProjectService`].
///
/// `interactive` decides whether a token prompt is attached; the process
/// environment supplies the `$GITHUB_TOKEN` fallback.
pub(crate) fn build_service(
    config: &AppConfig,
    output: &OutputManager,
    interactive: bool,
) -> CliResult<ProjectService> {
    let remote = GitHubClient::new(&config.github.api_url, config.github_timeout())?;

    let service = ProjectService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemCommandRunner::new()),
        Box::new(remote),
        Box::new(BuiltinTemplates::default()),
        Box::new(output.clone()),
    );

    Ok(match interactive.then(|| prompt::token_prompt(output)).flatten() {
        Some(token_prompt) => service.with_prompt(token_prompt),
        None => service,
    })
}

/// `--dir`, or the current directory.
pub(crate) fn base_dir(dir: Option<PathBuf>) -> CliResult<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().with_cli_context(|| "failed to read the current directory"),
    }
}
