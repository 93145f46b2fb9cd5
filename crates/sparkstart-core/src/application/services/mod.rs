//! Application services - orchestrate use cases.
//!
//! `ProjectService` drives project creation and deletion; `CredentialStore`
//! resolves and persists the hosting token it needs for publishing.

pub mod credentials;
pub mod project_service;

pub use credentials::{CREDENTIAL_FILE, CredentialStore, TOKEN_ENV_VAR, token_creation_url};
pub use project_service::{DEFAULT_BRANCH, ProjectService, ProjectSummary};
