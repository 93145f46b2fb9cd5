//! Guided project creation for `sparkstart new` without a name.

use std::path::Path;

use sparkstart_core::application::ProjectService;
use sparkstart_core::domain::{Language, ProjectConfig, validate_language, validate_name};

use crate::cli::canonical_language;
use crate::config::Defaults;
use crate::error::CliResult;
use crate::output::OutputManager;

/// Why a candidate name cannot be used, if it cannot.
#[cfg_attr(not(feature = "interactive"), allow(dead_code))]
fn name_problem(name: &str, exists: impl Fn(&str) -> bool) -> Option<String> {
    if let Err(e) = validate_name(name) {
        return Some(e.to_string());
    }
    if exists(name) {
        return Some(format!("'{name}' already exists here, pick another name"));
    }
    None
}

/// Position of the configured default language in [`Language::ALL`].
#[cfg_attr(not(feature = "interactive"), allow(dead_code))]
fn default_language_index(defaults: &Defaults) -> usize {
    validate_language(&canonical_language(&defaults.language))
        .ok()
        .and_then(|lang| Language::ALL.iter().position(|l| *l == lang))
        .unwrap_or(0)
}

#[cfg(feature = "interactive")]
pub fn run(
    service: &ProjectService,
    base_dir: &Path,
    defaults: &Defaults,
    output: &OutputManager,
) -> CliResult<ProjectConfig> {
    use dialoguer::{Confirm, Input, Select};

    use crate::prompt::interactive::prompt_error;

    output.header("\u{2728} Welcome to sparkstart!")?;
    output.print("Answer a few quick questions to set up your project.")?;
    output.print("")?;

    let name = loop {
        let candidate: String = Input::new()
            .with_prompt("Project name")
            .default("my-project".to_string())
            .interact_text()
            .map_err(prompt_error)?;
        let candidate = candidate.trim().to_string();

        match name_problem(&candidate, |n| service.project_exists(n, base_dir)) {
            Some(problem) => output.warning(&problem)?,
            None => break candidate,
        }
    };

    let labels: Vec<&str> = Language::ALL.iter().map(|l| l.display_name()).collect();
    let picked = Select::new()
        .with_prompt("Language")
        .items(&labels)
        .default(default_language_index(defaults))
        .interact()
        .map_err(prompt_error)?;
    let language = Language::ALL[picked];

    let ask = |question: &str, default: bool| {
        Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .map_err(prompt_error)
    };

    let tutorial = ask("Generate the tutorial game with tests?", false)?;

    let mut template = None;
    let templates: Vec<_> = language.templates().collect();
    if !tutorial && !templates.is_empty() {
        let mut choices = vec!["none".to_string()];
        choices.extend(
            templates
                .iter()
                .map(|t| format!("{t} - {}", t.description())),
        );
        let picked = Select::new()
            .with_prompt("Template")
            .items(&choices)
            .default(0)
            .interact()
            .map_err(prompt_error)?;
        template = picked.checked_sub(1).map(|i| templates[i]);
    }

    let devcontainer = ask("Add a dev container (Docker)?", defaults.devcontainer)?;
    let tools = ask("Add formatter, linter and pre-commit config?", defaults.tools)?;
    let venv = language == Language::Python
        && ask("Create a virtual environment (.venv)?", defaults.venv)?;
    let github = ask("Create a GitHub repository and push?", defaults.github)?;

    let config = ProjectConfig::builder(name, language)
        .template(template)
        .tutorial(tutorial)
        .devcontainer(devcontainer)
        .tools(tools)
        .venv(venv)
        .github(github)
        .build()?;
    Ok(config)
}

#[cfg(not(feature = "interactive"))]
pub fn run(
    _service: &ProjectService,
    _base_dir: &Path,
    _defaults: &Defaults,
    _output: &OutputManager,
) -> CliResult<ProjectConfig> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_names_are_explained() {
        let problem = name_problem("1bad", |_| false).unwrap();
        assert!(problem.contains("Invalid project name '1bad'"));
        assert!(name_problem("build", |_| false).is_some());
    }

    #[test]
    fn existing_directories_are_rejected() {
        let problem = name_problem("demo", |n| n == "demo").unwrap();
        assert!(problem.contains("already exists"));
        assert_eq!(name_problem("fresh", |n| n == "demo"), None);
    }

    #[test]
    fn default_language_follows_config() {
        let mut defaults = Defaults::default();
        assert_eq!(Language::ALL[default_language_index(&defaults)], Language::Python);

        defaults.language = "js".into();
        assert_eq!(
            Language::ALL[default_language_index(&defaults)],
            Language::JavaScript
        );

        defaults.language = "cobol".into();
        assert_eq!(default_language_index(&defaults), 0);
    }
}
