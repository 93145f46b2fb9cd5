//! Scaffolders: pure producers of [`ProjectStructure`]s.
//!
//! Each scaffolder maps `(project root, config, registry)` to the files one
//! concern needs. None of them touch the filesystem, the network, or a
//! process; the orchestrator writes their output.

mod guide;
mod tools;

pub use guide::getting_started;
pub use tools::{amend_package_json, amend_pyproject};

use std::path::Path;

use tracing::debug;

use crate::{
    application::ports::TemplateRegistry,
    domain::{
        ArtifactKind, DomainError, Language, Permissions, ProjectConfig, ProjectStructure,
        RenderContext, SourceBranch,
    },
    error::SparkResult,
};

/// Render every registry file for `(kind, language)`.
///
/// A missing registry entry is `UnsupportedLanguage` for that artifact kind.
pub fn render_artifact(
    kind: ArtifactKind,
    config: &ProjectConfig,
    root: &Path,
    registry: &dyn TemplateRegistry,
) -> SparkResult<ProjectStructure> {
    let language = config.language();
    let files = registry
        .files(kind, language)
        .ok_or_else(|| unsupported(kind, language))?;

    let ctx = RenderContext::new(config.name());
    let mut structure = ProjectStructure::new(root);
    for file in files {
        let perms = if file.executable {
            Permissions::executable()
        } else {
            Permissions::read_write()
        };
        structure.add_file(file.path, ctx.render(file.body), perms);
    }

    debug!(%kind, %language, files = structure.entry_count(), "Rendered artifact");
    Ok(structure)
}

/// Source tree for the config's branch: tutorial, template, or standard.
pub fn source(
    config: &ProjectConfig,
    root: &Path,
    registry: &dyn TemplateRegistry,
) -> SparkResult<ProjectStructure> {
    let kind = match config.branch() {
        SourceBranch::Tutorial => ArtifactKind::Tutorial,
        SourceBranch::Template(template) => {
            if !template.supports(config.language()) {
                return Err(DomainError::UnsupportedTemplate {
                    template: template.to_string(),
                    language: config.language().to_string(),
                    suggestion: None,
                }
                .into());
            }
            template.artifact()
        }
        SourceBranch::Standard => ArtifactKind::Source,
    };

    let mut structure = render_artifact(kind, config, root, registry)?;
    if config.language() == Language::Cpp {
        structure.add_directory("build");
    }
    Ok(structure)
}

/// Dev container descriptor, `.envrc` and `compose.yaml`, all or nothing.
pub fn auxiliary(
    config: &ProjectConfig,
    root: &Path,
    registry: &dyn TemplateRegistry,
) -> SparkResult<ProjectStructure> {
    let mut structure = ProjectStructure::new(root);
    for kind in ArtifactKind::AUXILIARY {
        structure.extend(render_artifact(kind, config, root, registry)?);
    }
    Ok(structure)
}

/// Tool configuration, plus the amended manifest when one was supplied
/// and something was missing from it.
///
/// `existing_manifest` is the current content of
/// [`Language::amendable_manifest`], if the project has one.
pub fn tools(
    config: &ProjectConfig,
    root: &Path,
    registry: &dyn TemplateRegistry,
    existing_manifest: Option<&str>,
) -> SparkResult<ProjectStructure> {
    let mut structure = render_artifact(ArtifactKind::Tools, config, root, registry)?;

    let (Some(manifest), Some(content)) =
        (config.language().amendable_manifest(), existing_manifest)
    else {
        return Ok(structure);
    };

    let path = root.join(manifest);
    let amended = match config.language() {
        Language::Python => amend_pyproject(content, &path)?,
        Language::JavaScript => amend_package_json(content, &path)?,
        Language::Rust | Language::Cpp => None,
    };

    if let Some(amended) = amended {
        structure.add_file(manifest, amended, Permissions::read_write());
    }
    Ok(structure)
}

/// `GETTING_STARTED.md`, always generated.
pub fn guide(config: &ProjectConfig, root: &Path) -> ProjectStructure {
    ProjectStructure::new(root).with_file(
        "GETTING_STARTED.md",
        getting_started(config.name(), config.language(), config.devcontainer()),
        Permissions::read_write(),
    )
}

fn unsupported(kind: ArtifactKind, language: Language) -> crate::error::SparkError {
    DomainError::UnsupportedLanguage {
        language: language.to_string(),
        artifact: Some(kind.to_string()),
        suggestion: None,
    }
    .into()
}
