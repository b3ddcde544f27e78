//! Domain layer - Business logic and domain models

pub mod command;
pub mod entry;
pub mod topic;

pub use command::{Command, FilterQuery, HelpTopic};
pub use entry::{FileEntry, FileKind};
pub use topic::{TopicRegistry, TOPICS};
