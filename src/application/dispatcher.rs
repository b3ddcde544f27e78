//! Command dispatch: parse a line, run it, report the outcome

use crate::application::{Buffer, ExportOutcome, FileStore, Notifier};
use crate::domain::{Command, FileEntry, FilterQuery, TopicRegistry};
use crate::error::{ClialgoError, ErrorCategory, Result};
use crate::infrastructure::{NoteStorage, Workspace};
use std::io::BufRead;

/// Whether the session loop should keep reading lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Owns the store, the buffer and the notifier for one session.
///
/// Every command runs to completion through `&mut self`, so two commands
/// can never interleave.
pub struct CommandDispatcher<S: NoteStorage, N: Notifier> {
    workspace: Workspace,
    store: FileStore<S>,
    buffer: Buffer,
    notifier: N,
}

impl<S: NoteStorage, N: Notifier> CommandDispatcher<S, N> {
    pub fn new(workspace: Workspace, store: FileStore<S>, notifier: N) -> Self {
        CommandDispatcher {
            workspace,
            store,
            buffer: Buffer::new(),
            notifier,
        }
    }

    pub fn store(&self) -> &FileStore<S> {
        &self.store
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_notifier(self) -> N {
        self.notifier
    }

    /// Read commands until `exit` or end of input.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and reported like
    /// any other bad command; only a failing reader ends the session early.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        self.notifier.welcome();

        let mut raw = Vec::new();
        loop {
            raw.clear();
            if input.read_until(b'\n', &mut raw)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&raw);
            if self.handle_line(&line) == Flow::Exit {
                break;
            }
        }

        self.notifier.exit();
        Ok(())
    }

    /// Parse and execute one input line. Blank lines are ignored.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        if line.trim().is_empty() {
            return Flow::Continue;
        }

        let command = Command::parse(line);
        tracing::debug!(keyword = command.keyword(), "Parsed command");
        self.execute(command)
    }

    /// Run a command. Failures are reported, never returned.
    pub fn execute(&mut self, command: Command) -> Flow {
        let result = match command {
            Command::Add {
                name,
                topic,
                importance,
            } => self.add(&name, &topic, importance),
            Command::Remove { name } => self.remove(&name),
            Command::List => {
                self.list();
                Ok(())
            }
            Command::Filter(query) => {
                self.filter(&query);
                Ok(())
            }
            Command::Export => self.export(),
            Command::Help(topic) => {
                self.notifier.help(topic);
                Ok(())
            }
            Command::Exit => return Flow::Exit,
            Command::Invalid(reason) => Err(ClialgoError::InvalidCommand(reason)),
            Command::InvalidTopic(topic) => Err(ClialgoError::InvalidTopic(topic)),
        };

        if let Err(e) = result {
            self.report(e);
        }
        Flow::Continue
    }

    fn add(&mut self, name: &str, topic: &str, importance: u8) -> Result<()> {
        let kind = self
            .workspace
            .detect_kind(name)
            .ok_or_else(|| ClialgoError::SourceNotFound(name.to_string()))?;

        if !TopicRegistry::is_valid_topic(topic) {
            self.execute(Command::InvalidTopic(topic.to_string()));
            return Ok(());
        }

        if self.store.is_repeated_note(name) {
            return Err(ClialgoError::DuplicateEntry(name.to_string()));
        }

        self.store
            .add_entry(FileEntry::new(name, topic, importance, kind))?;
        self.notifier.add_success(name, topic);
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<()> {
        let entry = self.store.remove_entry(name)?;
        self.buffer.remove_entry(&entry.name);
        self.notifier.remove_success(&entry.name);
        Ok(())
    }

    fn list(&mut self) {
        let entries = self.store.list_all();
        if entries.is_empty() {
            self.buffer.clear();
            self.notifier.list_fail();
            return;
        }

        self.notifier.list_success(&entries);
        self.buffer.update_buffer(entries);
    }

    fn filter(&mut self, query: &FilterQuery) {
        let entries = self.select(query);
        if entries.is_empty() {
            self.buffer.clear();
            self.notifier.filter_fail();
            return;
        }

        self.notifier.filter_success(&entries);
        self.buffer.update_buffer(entries);
    }

    fn select(&self, query: &FilterQuery) -> Vec<FileEntry> {
        match query {
            FilterQuery::Topic(topic) => self.store.get_entries_by_topic(topic),
            FilterQuery::Importance { topic, min } => {
                let mut entries = match topic {
                    Some(topic) => self.store.get_entries_by_topic(topic),
                    None => self.store.list_all(),
                };
                entries.retain(|entry| entry.importance >= *min);
                // Stable sort keeps insertion order among equal importance
                entries.sort_by(|a, b| b.importance.cmp(&a.importance));
                entries
            }
        }
    }

    fn export(&mut self) -> Result<()> {
        match self.buffer.export_buffer(&self.workspace)? {
            ExportOutcome::Empty => self.notifier.export_empty(),
            ExportOutcome::FolderRecreated(_) => self.notifier.export_folder_missing(),
            ExportOutcome::Completed {
                written,
                missing,
                failed,
            } => {
                for entry in &missing {
                    self.notifier.export_file_missing(entry);
                }
                for (entry, reason) in &failed {
                    self.notifier.export_entry_failed(entry, reason);
                }
                self.notifier
                    .export_success(written.len(), self.workspace.export_dir());
            }
        }
        Ok(())
    }

    fn report(&mut self, error: ClialgoError) {
        match error.category() {
            ErrorCategory::Parse | ErrorCategory::Validation => {
                tracing::debug!(category = ?error.category(), error = %error, "Command rejected");
            }
            _ => {
                tracing::warn!(category = ?error.category(), error = %error, "Command failed");
            }
        }

        match &error {
            ClialgoError::InvalidCommand(reason) => self.notifier.invalid_command(reason),
            ClialgoError::InvalidTopic(topic) => self.notifier.add_invalid_topic(topic),
            ClialgoError::DuplicateEntry(name) => self.notifier.add_duplicate(name),
            ClialgoError::SourceNotFound(name) => self.notifier.add_file_missing(name),
            ClialgoError::EntryNotFound(name) => self.notifier.remove_fail(name),
            ClialgoError::ExportFolderMissing(_) => self.notifier.export_folder_missing(),
            _ => self.notifier.operation_failed(&error),
        }
    }
}
