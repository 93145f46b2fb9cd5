//! Implementation of the `sparkstart new` command.
//!
//! Responsibility: turn CLI arguments (or wizard answers) into a
//! `ProjectConfig`, call the orchestrator, and display the summary.

use tracing::{debug, info, instrument};

use sparkstart_adapters::SystemCommandRunner;
use sparkstart_core::application::ports::CommandRunner;
use sparkstart_core::domain::{Language, ProjectConfig, validate_language, validate_template};

use crate::{
    cli::{NewArgs, canonical_language},
    config::{AppConfig, Defaults},
    error::{CliError, CliResult},
    output::OutputManager,
    prompt, wizard,
};

const VSCODE: &str = "code";

/// Execute the `sparkstart new` command.
///
/// Dispatch sequence:
/// 1. Resolve the parent directory
/// 2. Build a `ProjectConfig` from flags, or from the wizard when no name is given
/// 3. Advisory editor check for dev containers
/// 4. Run `create_project` under a spinner
/// 5. Render the summary
#[instrument(skip_all, fields(project = args.name.as_deref().unwrap_or("<wizard>")))]
pub fn execute(args: NewArgs, config: &AppConfig, output: OutputManager) -> CliResult<()> {
    let interactive = prompt::is_interactive();
    let base_dir = super::base_dir(args.dir.clone())?;
    let service = super::build_service(config, &output, interactive)?;

    let project = match args.name.as_deref() {
        Some(name) => project_from_args(name, &args, &config.defaults, &output)?,
        None if interactive => wizard::run(&service, &base_dir, &config.defaults, &output)?,
        None => {
            return Err(CliError::InvalidInput {
                message: "a project name is required when no terminal is attached".into(),
                source: None,
            });
        }
    };

    debug!(
        language = %project.language(),
        branch = ?project.branch(),
        devcontainer = project.devcontainer(),
        tools = project.tools(),
        github = project.github(),
        venv = project.venv(),
        "Project configuration resolved"
    );

    if project.devcontainer() && !SystemCommandRunner::new().is_available(VSCODE) {
        output.warning(
            "VS Code ('code') not found on PATH; install it from \
             https://code.visualstudio.com/ to open the dev container",
        )?;
    }

    output.header(&format!("Creating '{}'...", project.name()))?;
    info!(project = %project.name(), dir = %base_dir.display(), "Create started");

    output.start_spinner("Scaffolding");
    let result = service.create_project(&project, &base_dir);
    output.finish_spinner();
    let summary = result?;

    info!(project = %summary.name, files = summary.files.len(), "Create completed");
    output.summary(&summary)?;
    Ok(())
}

/// Combine flags with configured defaults. Flags can only switch options on;
/// `--no-venv` is the one negative flag.
fn project_from_args(
    name: &str,
    args: &NewArgs,
    defaults: &Defaults,
    output: &OutputManager,
) -> CliResult<ProjectConfig> {
    // `--lang` is folded by clap; the configured default gets the same treatment.
    let language: Language = match args.language.as_deref() {
        Some(lang) => validate_language(lang)?,
        None => validate_language(&canonical_language(&defaults.language))?,
    };

    let template = if args.tutorial {
        if args.template.is_some() {
            output.warning("--template is ignored with --tutorial")?;
        }
        None
    } else {
        validate_template(args.template.as_deref(), language)?
    };

    let config = ProjectConfig::builder(name, language)
        .template(template)
        .tutorial(args.tutorial)
        .devcontainer(args.devcontainer || defaults.devcontainer)
        .tools(args.tools || defaults.tools)
        .github(args.github || defaults.github)
        .venv(!args.no_venv && defaults.venv)
        .build()?;
    Ok(config)
}
