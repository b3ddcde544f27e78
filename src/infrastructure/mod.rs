//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod storage;
pub mod workspace;

pub use config::Config;
pub use storage::{MemoryStorage, NoteStorage, TomlStorage};
pub use workspace::Workspace;
