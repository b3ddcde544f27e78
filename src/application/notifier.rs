//! Notification seam between the dispatcher and the user interface

use crate::domain::{FileEntry, HelpTopic};
use crate::error::ClialgoError;
use std::path::Path;

/// Everything the dispatcher reports back to the user
pub trait Notifier {
    fn welcome(&mut self);
    fn exit(&mut self);

    fn add_success(&mut self, name: &str, topic: &str);
    fn add_file_missing(&mut self, name: &str);
    fn add_invalid_topic(&mut self, topic: &str);
    fn add_duplicate(&mut self, name: &str);

    fn remove_success(&mut self, name: &str);
    fn remove_fail(&mut self, name: &str);

    fn list_success(&mut self, entries: &[FileEntry]);
    fn list_fail(&mut self);

    fn filter_success(&mut self, entries: &[FileEntry]);
    fn filter_fail(&mut self);

    fn export_success(&mut self, written: usize, dir: &Path);
    fn export_empty(&mut self);
    fn export_folder_missing(&mut self);
    fn export_file_missing(&mut self, entry: &FileEntry);
    fn export_entry_failed(&mut self, entry: &FileEntry, reason: &str);

    fn help(&mut self, topic: Option<HelpTopic>);
    fn invalid_command(&mut self, reason: &str);

    /// A command failed for a reason the user cannot fix by retyping it
    fn operation_failed(&mut self, error: &ClialgoError);
}
