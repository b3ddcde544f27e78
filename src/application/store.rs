//! In-memory index of tracked files

use crate::domain::{FileEntry, TopicRegistry};
use crate::error::{ClialgoError, Result};
use crate::infrastructure::NoteStorage;
use std::collections::HashMap;

/// Name → entry mapping plus a topic → names index, backed by a NoteStorage.
///
/// Both indices are only touched after the storage write succeeded, so a
/// failed write leaves the store exactly as it was.
pub struct FileStore<S: NoteStorage> {
    storage: S,
    order: Vec<String>,
    by_name: HashMap<String, FileEntry>,
    by_topic: HashMap<String, Vec<String>>,
}

impl<S: NoteStorage> FileStore<S> {
    /// Create an empty store without reading the storage
    pub fn new(storage: S) -> Self {
        FileStore {
            storage,
            order: Vec::new(),
            by_name: HashMap::new(),
            by_topic: HashMap::new(),
        }
    }

    /// Build a store from the entries already in storage.
    ///
    /// Records that are malformed, have an unknown topic or repeat a name
    /// are skipped.
    pub fn load(storage: S) -> Result<Self> {
        let entries = storage.load()?;
        let mut store = Self::new(storage);

        for entry in entries {
            if let Err(reason) = entry.validate() {
                tracing::warn!(name = %entry.name, %reason, "Skipping malformed stored entry");
                continue;
            }
            if !TopicRegistry::is_valid_topic(&entry.topic) {
                tracing::warn!(name = %entry.name, topic = %entry.topic, "Skipping stored entry with unknown topic");
                continue;
            }
            if store.is_repeated_note(&entry.name) {
                tracing::warn!(name = %entry.name, "Skipping repeated stored entry");
                continue;
            }
            store.insert(entry);
        }

        tracing::debug!(count = store.len(), "Loaded file store");
        Ok(store)
    }

    /// Track a new entry, keyed by its name.
    ///
    /// Fails with `DuplicateEntry` if the name is taken, or `Persistence`
    /// if the storage write fails; neither changes the store.
    pub fn add_entry(&mut self, entry: FileEntry) -> Result<()> {
        if self.is_repeated_note(&entry.name) {
            return Err(ClialgoError::DuplicateEntry(entry.name));
        }
        if !TopicRegistry::is_valid_topic(&entry.topic) {
            return Err(ClialgoError::InvalidTopic(entry.topic));
        }

        self.storage
            .persist_add(&self.list_all(), &entry)
            .map_err(|e| ClialgoError::Persistence(e.to_string()))?;

        tracing::debug!(name = %entry.name, topic = %entry.topic, "Added entry");
        self.insert(entry);
        Ok(())
    }

    /// Stop tracking `name`, returning the removed entry
    pub fn remove_entry(&mut self, name: &str) -> Result<FileEntry> {
        if !self.is_repeated_note(name) {
            return Err(ClialgoError::EntryNotFound(name.to_string()));
        }

        self.storage
            .persist_remove(&self.list_all(), name)
            .map_err(|e| ClialgoError::Persistence(e.to_string()))?;

        let entry = self
            .by_name
            .remove(name)
            .ok_or_else(|| ClialgoError::EntryNotFound(name.to_string()))?;
        self.order.retain(|n| n != name);
        if let Some(names) = self.by_topic.get_mut(&entry.topic) {
            names.retain(|n| n != name);
            if names.is_empty() {
                self.by_topic.remove(&entry.topic);
            }
        }

        tracing::debug!(name, topic = %entry.topic, "Removed entry");
        Ok(entry)
    }

    /// Whether `name` is already tracked (under any topic)
    pub fn is_repeated_note(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&FileEntry> {
        self.by_name.get(name)
    }

    /// Entries tagged to `topic`, in insertion order
    pub fn get_entries_by_topic(&self, topic: &str) -> Vec<FileEntry> {
        self.by_topic
            .get(topic)
            .map(|names| names.iter().filter_map(|n| self.by_name.get(n)).cloned().collect())
            .unwrap_or_default()
    }

    /// Every entry, in insertion order
    pub fn list_all(&self) -> Vec<FileEntry> {
        self.order
            .iter()
            .filter_map(|n| self.by_name.get(n))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Rewrite the storage from the in-memory state
    pub fn recreate_all(&self) -> Result<()> {
        self.storage
            .recreate_all(&self.list_all())
            .map_err(|e| ClialgoError::Persistence(e.to_string()))
    }

    fn insert(&mut self, entry: FileEntry) {
        self.order.push(entry.name.clone());
        self.by_topic
            .entry(entry.topic.clone())
            .or_default()
            .push(entry.name.clone());
        self.by_name.insert(entry.name.clone(), entry);
    }
}
