/// Key-value persistence for the mock backend
///
/// The simulated backend keeps all of its state as raw text blobs under
/// fixed collection keys, the way a browser origin store would. The store
/// never interprets the text; serialization belongs to the directories
/// that own each collection.
///
/// Storage is deliberately forgiving: a missing value reads as `None`, and
/// write failures are logged and swallowed. Corrupt text is the reader's
/// problem and readers treat it as an empty collection.
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Raw text storage under fixed keys
///
/// Implementations must be safe to share across tasks; each call is
/// individually atomic, while multi-step read-modify-write sequences are
/// serialized by the calling directory.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored text for a key, if any
    fn read(&self, key: &str) -> Option<String>;

    /// Stores text under a key, replacing any previous value
    fn write(&self, key: &str, value: &str);

    /// Deletes a key; absent keys are a no-op
    fn remove(&self, key: &str);
}

/// In-memory store for tests and throwaway sessions
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

/// Filesystem-backed store, one file per key under a base directory
///
/// Gives the mock backend state that survives process restarts, the same
/// way the original browser store survived page reloads.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(err) = std::fs::create_dir_all(&self.base) {
            tracing::warn!(key = %key, error = %err, "could not create store directory, dropping write");
            return;
        }
        if let Err(err) = std::fs::write(self.entry_path(key), value) {
            tracing::warn!(key = %key, error = %err, "could not persist store entry, dropping write");
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}
