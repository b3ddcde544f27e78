//! Staging area for exporting a filtered set of entries

use crate::domain::FileEntry;
use crate::error::{ClialgoError, Result};
use crate::infrastructure::Workspace;
use std::path::PathBuf;

/// Result of one export attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Nothing was staged; no files were touched
    Empty,

    /// The export folder was missing and has been recreated; nothing was
    /// written and the buffer is kept so the export can be retried
    FolderRecreated(PathBuf),

    /// Every staged entry was attempted
    Completed {
        written: Vec<PathBuf>,
        /// Entries whose source file is gone from the root directory
        missing: Vec<FileEntry>,
        /// Entries that failed for another reason, with the error message
        failed: Vec<(FileEntry, String)>,
    },
}

/// Entries produced by the last `list` or `filter`, waiting to be exported
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    entries: Vec<FileEntry>,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents wholesale
    pub fn update_buffer(&mut self, entries: Vec<FileEntry>) {
        self.entries = entries;
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drop a staged entry that is no longer tracked
    pub fn remove_entry(&mut self, name: &str) {
        self.entries.retain(|entry| entry.name != name);
    }

    /// Copy every staged entry's file into the workspace export folder.
    ///
    /// One entry failing never stops the others. The buffer is drained once
    /// all entries have been attempted.
    pub fn export_buffer(&mut self, workspace: &Workspace) -> Result<ExportOutcome> {
        if self.is_empty() {
            return Ok(ExportOutcome::Empty);
        }

        if !workspace.export_dir_exists() {
            workspace.create_export_dir()?;
            tracing::warn!(
                dir = %workspace.export_dir().display(),
                "Export folder was missing and has been recreated"
            );
            return Ok(ExportOutcome::FolderRecreated(
                workspace.export_dir().to_path_buf(),
            ));
        }

        let mut written = Vec::new();
        let mut missing = Vec::new();
        let mut failed = Vec::new();

        for entry in &self.entries {
            match workspace.copy_to_export(entry) {
                Ok(path) => written.push(path),
                Err(ClialgoError::SourceNotFound(_)) => {
                    tracing::warn!(name = %entry.name, path = %entry.path, "Source file missing, skipped");
                    missing.push(entry.clone());
                }
                Err(e) => {
                    tracing::warn!(name = %entry.name, error = %e, "Failed to export entry");
                    failed.push((entry.clone(), e.to_string()));
                }
            }
        }

        tracing::info!(
            written = written.len(),
            missing = missing.len(),
            failed = failed.len(),
            "Export finished"
        );
        self.clear();

        Ok(ExportOutcome::Completed {
            written,
            missing,
            failed,
        })
    }
}
