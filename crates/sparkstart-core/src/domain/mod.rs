// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for sparkstart.
//!
//! Pure data and rules: what a project is, which names and language/template
//! combinations are acceptable, and the shape of scaffold output. All I/O,
//! processes and network access are reached through ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: `ProjectConfig` is frozen by its builder
//! - **Closed sets**: languages, templates and artifact kinds are enums
//!
pub mod entities;
pub mod error;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    DirectoryToCreate, FileToWrite, FsEntry, Permissions, ProjectConfig, ProjectConfigBuilder,
    ProjectStructure, RenderContext, SourceBranch,
};

pub use error::DomainError;

pub use validation::{validate_language, validate_name, validate_template};

pub use value_objects::{
    AccessToken, ArtifactKind, AuthenticatedUrl, CloneUrl, Language, Template, TemplateFile,
};
