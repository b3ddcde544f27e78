//! File system access for the workspace root and export folder

use crate::domain::{FileEntry, FileKind};
use crate::error::{ClialgoError, Result};
use crate::infrastructure::config::META_DIR;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the workspace root
pub const ROOT_ENV: &str = "CLIALGO_ROOT";

/// The directory holding the user's note and code files
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    export_dir: PathBuf,
}

impl Workspace {
    /// Create a workspace with the given root and absolute export folder
    pub fn new(root: PathBuf, export_dir: PathBuf) -> Self {
        Workspace { root, export_dir }
    }

    /// Resolve the workspace root.
    /// An explicit path wins, then CLIALGO_ROOT, then the current directory.
    pub fn discover(explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Self::checked_root(path, "--root");
        }

        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            return Self::checked_root(PathBuf::from(root_path), ROOT_ENV);
        }

        Ok(std::env::current_dir()?)
    }

    fn checked_root(path: PathBuf, source: &str) -> Result<PathBuf> {
        if path.is_dir() {
            Ok(path)
        } else {
            Err(ClialgoError::Config(format!(
                "{} points to '{}', which is not a directory",
                source,
                path.display()
            )))
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Whether the .clialgo metadata directory exists
    pub fn is_initialized(&self) -> bool {
        self.root.join(META_DIR).is_dir()
    }

    /// Create the .clialgo metadata directory if needed
    pub fn initialize(&self) -> Result<()> {
        let meta_dir = self.root.join(META_DIR);
        if !meta_dir.exists() {
            fs::create_dir_all(&meta_dir)?;
        }
        Ok(())
    }

    /// Find NAME.txt or NAME.cpp in the root; a note wins over code.
    pub fn detect_kind(&self, name: &str) -> Option<FileKind> {
        FileKind::all()
            .into_iter()
            .find(|kind| self.root.join(format!("{}.{}", name, kind.extension())).is_file())
    }

    /// Path of the tracked file behind an entry
    pub fn source_path(&self, entry: &FileEntry) -> PathBuf {
        self.root.join(&entry.path)
    }

    pub fn export_dir_exists(&self) -> bool {
        self.export_dir.is_dir()
    }

    pub fn create_export_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.export_dir).map_err(ClialgoError::Io)
    }

    /// Copy an entry's file into the export folder, returning the written path
    pub fn copy_to_export(&self, entry: &FileEntry) -> Result<PathBuf> {
        let from_path = self.source_path(entry);
        if !from_path.is_file() {
            return Err(ClialgoError::SourceNotFound(entry.name.clone()));
        }
        if !self.export_dir_exists() {
            return Err(ClialgoError::ExportFolderMissing(self.export_dir.clone()));
        }

        let to_path = self.export_dir.join(entry.export_filename());
        fs::copy(&from_path, &to_path)?;
        Ok(to_path)
    }
}
