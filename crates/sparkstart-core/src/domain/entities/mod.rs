pub mod common;
pub mod project_config;
pub mod project_structure;
pub mod render_context;

pub use common::Permissions;
pub use project_config::{ProjectConfig, ProjectConfigBuilder, SourceBranch};
pub use project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
pub use render_context::RenderContext;
