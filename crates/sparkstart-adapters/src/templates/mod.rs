//! Built-in template registry.
//!
//! Every file body ships inside the binary. Bodies live under
//! `crates/sparkstart-adapters/templates/<language>/` and are pulled in with
//! `include_str!`, so the registry is a fixed table with no runtime lookup
//! beyond a `match`.
//!
//! Dotfiles are stored without their leading dot (and `Cargo.toml` as
//! `Cargo.toml.tmpl`) so they do not affect this repository's own tooling;
//! the table maps them to their real destination paths.

/// Body of a file under `templates/`.
macro_rules! body {
    ($path:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $path))
    };
}

mod cpp;
mod javascript;
mod python;
mod rust;

use sparkstart_core::{
    application::ports::TemplateRegistry,
    domain::{ArtifactKind, Language, TemplateFile},
};

const EDITORCONFIG: TemplateFile = TemplateFile::new(".editorconfig", body!("common/editorconfig"));

/// The registry compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRegistry for BuiltinTemplates {
    fn files(&self, kind: ArtifactKind, language: Language) -> Option<&'static [TemplateFile]> {
        use ArtifactKind as K;
        use Language as L;

        let files: &'static [TemplateFile] = match (kind, language) {
            (K::Source, L::Python) => &python::SOURCE,
            (K::Source, L::Rust) => &rust::SOURCE,
            (K::Source, L::JavaScript) => &javascript::SOURCE,
            (K::Source, L::Cpp) => &cpp::SOURCE,

            (K::Pygame, L::Python) => &python::PYGAME,

            (K::Tutorial, L::Python) => &python::TUTORIAL,
            (K::Tutorial, L::Rust) => &rust::TUTORIAL,
            (K::Tutorial, L::JavaScript) => &javascript::TUTORIAL,
            (K::Tutorial, L::Cpp) => &cpp::TUTORIAL,

            (K::DevContainer, L::Python) => &python::DEVCONTAINER,
            (K::DevContainer, L::Rust) => &rust::DEVCONTAINER,
            (K::DevContainer, L::JavaScript) => &javascript::DEVCONTAINER,
            (K::DevContainer, L::Cpp) => &cpp::DEVCONTAINER,

            (K::Direnv, L::Python) => &python::DIRENV,
            (K::Direnv, L::Rust) => &rust::DIRENV,
            (K::Direnv, L::JavaScript) => &javascript::DIRENV,
            (K::Direnv, L::Cpp) => &cpp::DIRENV,

            (K::Compose, L::Python) => &python::COMPOSE,
            (K::Compose, L::Rust) => &rust::COMPOSE,
            (K::Compose, L::JavaScript) => &javascript::COMPOSE,
            (K::Compose, L::Cpp) => &cpp::COMPOSE,

            (K::Tools, L::Python) => &python::TOOLS,
            (K::Tools, L::Rust) => &rust::TOOLS,
            (K::Tools, L::JavaScript) => &javascript::TOOLS,
            (K::Tools, L::Cpp) => &cpp::TOOLS,

            (K::Pygame, _) => return None,
        };
        Some(files)
    }
}
