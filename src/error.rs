//! Error types for clialgo

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for clialgo
#[derive(Debug, Error)]
pub enum ClialgoError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Invalid topic: {0}")]
    InvalidTopic(String),

    #[error("Note already exists: {0}")]
    DuplicateEntry(String),

    #[error("No .txt or .cpp file named '{0}' in the root directory")]
    SourceNotFound(String),

    #[error("Note not found: {0}")]
    EntryNotFound(String),

    #[error("Failed to save notes: {0}")]
    Persistence(String),

    #[error("Export folder missing: {0}")]
    ExportFolderMissing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Coarse grouping of errors, used for diagnostics at the command boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Unrecognized keyword or malformed fields
    Parse,
    /// Input was well-formed but rejected (topic, duplicate, missing file)
    Validation,
    /// The note data file could not be written
    Persistence,
    /// Export folder or source file missing at export time
    Export,
    /// Startup problems: unreadable config, I/O, serialization
    Environment,
}

impl ClialgoError {
    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClialgoError::InvalidCommand(_) => ErrorCategory::Parse,
            ClialgoError::InvalidTopic(_)
            | ClialgoError::DuplicateEntry(_)
            | ClialgoError::SourceNotFound(_)
            | ClialgoError::EntryNotFound(_) => ErrorCategory::Validation,
            ClialgoError::Persistence(_) => ErrorCategory::Persistence,
            ClialgoError::ExportFolderMissing(_) => ErrorCategory::Export,
            ClialgoError::Io(_)
            | ClialgoError::Config(_)
            | ClialgoError::TomlDeserialize(_)
            | ClialgoError::TomlSerialize(_) => ErrorCategory::Environment,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type using ClialgoError
pub type Result<T> = std::result::Result<T, ClialgoError>;
