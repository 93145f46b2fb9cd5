//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sparkstart-adapters` and the
//! CLI implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `CommandRunner`: External processes (git, python3) and PATH lookups
//!   - `RemoteRepository`: Hosted Git API
//!   - `TemplateRegistry`: Built-in file bodies
//!   - `Reporter`: User-facing progress messages
//!   - `TokenPrompt`: Interactive token entry (optional capability)

pub mod output;

pub use output::{
    CommandRunner, CommandSpec, Filesystem, RemoteRepository, Reporter, TemplateRegistry,
    TokenPrompt, TracingReporter,
};

#[cfg(test)]
pub use output::{
    MockCommandRunner, MockFilesystem, MockRemoteRepository, MockTemplateRegistry,
    MockTokenPrompt,
};
