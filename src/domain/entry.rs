//! Tracked note and code files

use serde::{Deserialize, Serialize};
use std::fmt;

/// Importance given to an entry when `add` omits `i/`
pub const DEFAULT_IMPORTANCE: u8 = 5;

/// Highest accepted importance (lowest is 1)
pub const MAX_IMPORTANCE: u8 = 10;

/// What kind of file an entry points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Plain text note (NAME.txt)
    Note,
    /// C++ source (NAME.cpp)
    Code,
}

impl FileKind {
    /// File extension without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Note => "txt",
            FileKind::Code => "cpp",
        }
    }

    /// Kinds in lookup order; a note wins over code with the same name
    pub fn all() -> [FileKind; 2] {
        [FileKind::Note, FileKind::Code]
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Note => write!(f, "note"),
            FileKind::Code => write!(f, "code"),
        }
    }
}

/// One tracked file. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    pub topic: String,
    pub importance: u8,
    pub kind: FileKind,
}

impl FileEntry {
    /// Build an entry; the path is derived from the name and kind.
    pub fn new(name: &str, topic: &str, importance: u8, kind: FileKind) -> Self {
        FileEntry {
            name: name.to_string(),
            path: format!("{}.{}", name, kind.extension()),
            topic: topic.to_string(),
            importance,
            kind,
        }
    }

    /// File name used for the exported copy
    pub fn export_filename(&self) -> String {
        format!("{}.{}", self.name, self.kind.extension())
    }

    /// Whether a name is a bare file stem that stays inside its folder.
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && name != "." && name != ".." && !name.contains(&['/', '\\'][..])
    }

    /// Check a record read back from storage against the rules `new` enforces
    pub fn validate(&self) -> Result<(), String> {
        if !Self::is_valid_name(&self.name) {
            return Err(format!("invalid name '{}'", self.name));
        }
        if !(1..=MAX_IMPORTANCE).contains(&self.importance) {
            return Err(format!("importance {} out of range", self.importance));
        }
        let expected = format!("{}.{}", self.name, self.kind.extension());
        if self.path != expected {
            return Err(format!("path '{}' should be '{}'", self.path, expected));
        }
        Ok(())
    }
}
