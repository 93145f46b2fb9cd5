//! Application layer for sparkstart.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectService, CredentialStore)
//! - **Scaffold**: Pure producers of project structures
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Validation rules live in `crate::domain`; this layer sequences them
//! with the side effects reached through ports.

pub mod error;
pub mod ports;
pub mod scaffold;
pub mod services;

pub use services::{CredentialStore, ProjectService, ProjectSummary};

pub use error::ApplicationError;
