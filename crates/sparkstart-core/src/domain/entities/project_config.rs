//! The immutable description of one project to create.

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    validation::validate_name,
    value_objects::{Language, Template},
};

/// Everything the orchestrator needs to know about a project.
///
/// Built once per invocation through [`ProjectConfig::builder`], which runs
/// name and template validation, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    name: String,
    language: Language,
    template: Option<Template>,
    tutorial: bool,
    devcontainer: bool,
    tools: bool,
    github: bool,
    venv: bool,
}

/// Which source scaffold a config selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "template")]
pub enum SourceBranch {
    Standard,
    Template(Template),
    Tutorial,
}

impl ProjectConfig {
    pub fn builder(name: impl Into<String>, language: Language) -> ProjectConfigBuilder {
        ProjectConfigBuilder {
            name: name.into(),
            language,
            template: None,
            tutorial: false,
            devcontainer: false,
            tools: false,
            github: false,
            venv: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Always `None` when the tutorial branch is selected.
    pub fn template(&self) -> Option<Template> {
        self.template
    }

    pub fn tutorial(&self) -> bool {
        self.tutorial
    }

    pub fn devcontainer(&self) -> bool {
        self.devcontainer
    }

    pub fn tools(&self) -> bool {
        self.tools
    }

    pub fn github(&self) -> bool {
        self.github
    }

    /// Only meaningful for python projects.
    pub fn venv(&self) -> bool {
        self.venv && self.language == Language::Python
    }

    pub fn branch(&self) -> SourceBranch {
        match (self.tutorial, self.template) {
            (true, _) => SourceBranch::Tutorial,
            (false, Some(t)) => SourceBranch::Template(t),
            (false, None) => SourceBranch::Standard,
        }
    }
}

/// Builder for [`ProjectConfig`].
#[derive(Debug, Clone)]
#[must_use]
pub struct ProjectConfigBuilder {
    name: String,
    language: Language,
    template: Option<Template>,
    tutorial: bool,
    devcontainer: bool,
    tools: bool,
    github: bool,
    venv: bool,
}

impl ProjectConfigBuilder {
    pub fn template(mut self, template: Option<Template>) -> Self {
        self.template = template;
        self
    }

    pub fn tutorial(mut self, yes: bool) -> Self {
        self.tutorial = yes;
        self
    }

    pub fn devcontainer(mut self, yes: bool) -> Self {
        self.devcontainer = yes;
        self
    }

    pub fn tools(mut self, yes: bool) -> Self {
        self.tools = yes;
        self
    }

    pub fn github(mut self, yes: bool) -> Self {
        self.github = yes;
        self
    }

    pub fn venv(mut self, yes: bool) -> Self {
        self.venv = yes;
        self
    }

    /// Validate and freeze.
    ///
    /// # Errors
    ///
    /// - `InvalidName` if the name fails [`validate_name`]
    /// - `UnsupportedTemplate` if a template is set for a language outside its
    ///   allow-list (unless `tutorial` is set, which discards the template)
    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        validate_name(&self.name)?;

        let template = if self.tutorial {
            None
        } else {
            match self.template {
                Some(t) if !t.supports(self.language) => {
                    return Err(DomainError::UnsupportedTemplate {
                        template: t.to_string(),
                        language: self.language.to_string(),
                        suggestion: None,
                    });
                }
                other => other,
            }
        };

        Ok(ProjectConfig {
            name: self.name,
            language: self.language,
            template,
            tutorial: self.tutorial,
            devcontainer: self.devcontainer,
            tools: self.tools,
            github: self.github,
            venv: self.venv,
        })
    }
}
