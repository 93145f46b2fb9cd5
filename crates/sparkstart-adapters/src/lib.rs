//! Infrastructure adapters for sparkstart.
//!
//! This crate implements the ports defined in
//! `sparkstart_core::application::ports`. It holds every dependency on the
//! outside world: the disk, child processes, and the GitHub API.

pub mod filesystem;
pub mod github;
pub mod process;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use github::GitHubClient;
pub use process::SystemCommandRunner;
pub use templates::BuiltinTemplates;
