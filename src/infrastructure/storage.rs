//! Note data persistence

use crate::domain::FileEntry;
use crate::error::{ClialgoError, Result};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

/// Persists the full set of tracked entries.
///
/// Every write stores a complete snapshot, so the add/remove helpers are
/// expressed in terms of [`NoteStorage::recreate_all`].
pub trait NoteStorage {
    /// Load all stored entries in insertion order
    fn load(&self) -> Result<Vec<FileEntry>>;

    /// Replace the stored snapshot with `entries`
    fn recreate_all(&self, entries: &[FileEntry]) -> Result<()>;

    /// Store `current` plus `entry`
    fn persist_add(&self, current: &[FileEntry], entry: &FileEntry) -> Result<()> {
        let mut next = current.to_vec();
        next.push(entry.clone());
        self.recreate_all(&next)
    }

    /// Store `current` without the entry called `name`
    fn persist_remove(&self, current: &[FileEntry], name: &str) -> Result<()> {
        let next: Vec<FileEntry> = current
            .iter()
            .filter(|entry| entry.name != name)
            .cloned()
            .collect();
        self.recreate_all(&next)
    }
}

#[derive(Debug, Default, Deserialize)]
struct DataFile {
    #[serde(rename = "entry", default)]
    entries: Vec<FileEntry>,
}

#[derive(Debug, Serialize)]
struct DataFileRef<'a> {
    #[serde(rename = "entry")]
    entries: &'a [FileEntry],
}

/// TOML file implementation of NoteStorage
#[derive(Debug, Clone)]
pub struct TomlStorage {
    path: PathBuf,
}

impl TomlStorage {
    pub fn new(path: PathBuf) -> Self {
        TomlStorage { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn write_atomic(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.clialgo-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("notes.toml"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl NoteStorage for TomlStorage {
    fn load(&self) -> Result<Vec<FileEntry>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ClialgoError::Io(e)),
        };

        let data: DataFile = toml::from_str(&contents)?;
        Ok(data.entries)
    }

    fn recreate_all(&self, entries: &[FileEntry]) -> Result<()> {
        let contents = toml::to_string_pretty(&DataFileRef { entries })?;
        self.write_atomic(&contents)
    }
}

/// In-memory NoteStorage whose writes can be made to fail
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<Vec<FileEntry>>,
    fail_writes: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<FileEntry>) -> Self {
        MemoryStorage {
            entries: RefCell::new(entries),
            fail_writes: Cell::new(false),
        }
    }

    /// Make every following write fail until switched back
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Current stored snapshot
    pub fn snapshot(&self) -> Vec<FileEntry> {
        self.entries.borrow().clone()
    }
}

impl NoteStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<FileEntry>> {
        Ok(self.snapshot())
    }

    fn recreate_all(&self, entries: &[FileEntry]) -> Result<()> {
        if self.fail_writes.get() {
            return Err(ClialgoError::Persistence(
                "storage is read-only".to_string(),
            ));
        }
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }
}
