//! Domain value objects: Language, Template, ArtifactKind and the small
//! credential/remote wrappers.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity. The language
//! and template sets are closed enums so that every scaffold lookup is an
//! exhaustive match rather than a string comparison.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm here (parsing matches against it)
//! 3. Register template bodies for it in the built-in registry adapter

use crate::domain::{error::DomainError, validation::validate_language};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Language ─────────────────────────────────────────────────────────────────

/// A supported programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Rust,
    JavaScript,
    Cpp,
}

impl Language {
    pub const ALL: [Language; 4] = [Self::Python, Self::Rust, Self::JavaScript, Self::Cpp];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Rust => "rust",
            Self::JavaScript => "javascript",
            Self::Cpp => "cpp",
        }
    }

    /// Human-facing name used in generated documentation.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Rust => "Rust",
            Self::JavaScript => "JavaScript",
            Self::Cpp => "C++",
        }
    }

    /// Dependency manifest that the tools scaffolder may amend in place.
    ///
    /// Rust and C++ manifests are never touched after the source scaffold.
    pub const fn amendable_manifest(&self) -> Option<&'static str> {
        match self {
            Self::Python => Some("pyproject.toml"),
            Self::JavaScript => Some("package.json"),
            Self::Rust | Self::Cpp => None,
        }
    }

    /// Templates that may be combined with this language.
    pub fn templates(self) -> impl Iterator<Item = Template> {
        Template::ALL.into_iter().filter(move |t| t.supports(self))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    /// Exact match against [`Language::as_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_language(s)
    }
}

// ── Template ─────────────────────────────────────────────────────────────────

/// An optional, language-specific starter that replaces the standard sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Pygame,
}

impl Template {
    pub const ALL: [Template; 1] = [Self::Pygame];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pygame => "pygame",
        }
    }

    /// Per-language allow-list.
    pub const fn supports(&self, language: Language) -> bool {
        match self {
            Self::Pygame => matches!(language, Language::Python),
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Pygame => "Snake game skeleton built on pygame",
        }
    }

    /// Registry key holding this template's files.
    pub const fn artifact(&self) -> ArtifactKind {
        match self {
            Self::Pygame => ArtifactKind::Pygame,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// Key half of a template-registry lookup; the other half is the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// Standard hello-world sources, manifest, README and ignore file.
    Source,
    /// Pygame starter (python only).
    Pygame,
    /// Number-guessing tutorial project.
    Tutorial,
    /// `.devcontainer/devcontainer.json`
    DevContainer,
    /// `.envrc`
    Direnv,
    /// `compose.yaml`
    Compose,
    /// Formatter, linter and pre-commit configuration.
    Tools,
}

impl ArtifactKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Pygame => "pygame",
            Self::Tutorial => "tutorial",
            Self::DevContainer => "devcontainer",
            Self::Direnv => "direnv",
            Self::Compose => "compose",
            Self::Tools => "tools",
        }
    }

    /// The three artifacts gated together by the `devcontainer` flag.
    pub const AUXILIARY: [ArtifactKind; 3] = [Self::DevContainer, Self::Direnv, Self::Compose];
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TemplateFile ─────────────────────────────────────────────────────────────

/// One named file body held by the template registry.
///
/// `body` may contain `{{PROJECT_NAME}}`-style placeholders; see
/// [`RenderContext`](crate::domain::RenderContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: &'static str,
    pub body: &'static str,
    pub executable: bool,
}

impl TemplateFile {
    pub const fn new(path: &'static str, body: &'static str) -> Self {
        Self {
            path,
            body,
            executable: false,
        }
    }

    pub const fn executable(path: &'static str, body: &'static str) -> Self {
        Self {
            path,
            body,
            executable: true,
        }
    }
}

// ── AccessToken ──────────────────────────────────────────────────────────────

/// An opaque hosting-API token.
///
/// `Debug` never prints the value and there is no `Display`; use
/// [`AccessToken::expose`] at the single point where the secret is sent.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Returns `None` for empty or whitespace-only input.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

// ── CloneUrl ─────────────────────────────────────────────────────────────────

/// Plain HTTPS clone URL as returned by the hosting API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloneUrl(String);

impl CloneUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Insert the token as URL userinfo right after the scheme.
    pub fn authenticated(&self, token: &AccessToken) -> Result<AuthenticatedUrl, DomainError> {
        let rest = self
            .0
            .strip_prefix("https://")
            .ok_or_else(|| DomainError::InvalidRemoteUrl {
                url: self.0.clone(),
            })?;

        Ok(AuthenticatedUrl {
            url: format!("https://{}@{rest}", token.expose()),
            redacted: format!("https://***@{rest}"),
        })
    }
}

impl fmt::Display for CloneUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Clone URL carrying a token. Only `expose` yields the secret form;
/// `Display` and `Debug` print the redacted URL.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthenticatedUrl {
    url: String,
    redacted: String,
}

impl AuthenticatedUrl {
    pub fn expose(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for AuthenticatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted)
    }
}

impl fmt::Debug for AuthenticatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthenticatedUrl({})", self.redacted)
    }
}
