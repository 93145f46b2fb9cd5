//! sparkstart core - hexagonal architecture for project bootstrapping.
//!
//! This crate holds the domain model (project configuration, validation,
//! scaffold output) and the application layer (ports, scaffolders and the
//! create/delete orchestration) for the `sparkstart` tool.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          sparkstart-cli (CLI)           │
//! │   (argument parsing, prompts, output)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │   (ProjectService, CredentialStore)     │
//! │     create_project / delete_project     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ (Filesystem, CommandRunner, Remote,     │
//! │  TemplateRegistry, Reporter, Prompt)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   sparkstart-adapters (Infrastructure)  │
//! │ (LocalFilesystem, GitHubClient, git...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectConfig, Language, validation)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sparkstart_core::{
//!     application::ProjectService,
//!     domain::{Language, ProjectConfig},
//! };
//!
//! let config = ProjectConfig::builder("my-project", Language::Rust)
//!     .tools(true)
//!     .build()
//!     .unwrap();
//!
//! // Adapters come from `sparkstart-adapters`.
//! let service = ProjectService::new(filesystem, runner, remote, registry, reporter);
//! let summary = service.create_project(&config, "./".as_ref()).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CredentialStore, ProjectService, ProjectSummary,
        ports::{
            CommandRunner, CommandSpec, Filesystem, RemoteRepository, Reporter, TemplateRegistry,
            TokenPrompt,
        },
    };
    pub use crate::domain::{
        AccessToken, ArtifactKind, CloneUrl, Language, ProjectConfig, ProjectStructure,
        SourceBranch, Template,
    };
    pub use crate::error::{SparkError, SparkResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
