//! Filesystem adapters.
//!
//! `LocalFilesystem` is what the binary uses; `MemoryFilesystem` backs
//! tests that do not want to touch the disk.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
