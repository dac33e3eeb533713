//! Key/value storage adapters

use crate::error::{MoodlogError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory holding one file per key
pub const STORE_DIR: &str = ".moodlog";

/// A string-keyed, string-valued persistent medium
pub trait KeyValueStorage {
    /// Read a key; `Ok(None)` when it has never been written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace a key's value in full
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// File system implementation: `<root>/.moodlog/<key>`
#[derive(Debug, Clone)]
pub struct FileStorage {
    pub root: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        FileStorage { root }
    }

    /// Resolve the journal root.
    /// Checks MOODLOG_ROOT first, then walks up from the current directory,
    /// then settles on the current directory for a fresh journal.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if path.is_dir() {
                return Ok(FileStorage::new(path));
            }
            return Err(MoodlogError::Config(format!(
                "MOODLOG_ROOT is set to '{}' but that directory does not exist",
                path.display()
            )));
        }

        let current_dir = std::env::current_dir()?;
        Ok(Self::discover_from(&current_dir)
            .unwrap_or_else(|| FileStorage::new(current_dir.clone())))
    }

    /// Walk up from `start` looking for an existing .moodlog directory
    pub fn discover_from(start: &Path) -> Option<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_store_dir(dir))
            .map(|dir| FileStorage::new(dir.to_path_buf()))
    }

    pub fn store_dir(&self) -> PathBuf {
        self.root.join(STORE_DIR)
    }

    fn has_store_dir(path: &Path) -> bool {
        path.join(STORE_DIR).is_dir()
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(MoodlogError::Config(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.store_dir().join(key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MoodlogError::Storage(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let dir = self.store_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        // Readers only ever see the old or the new value in full
        let tmp = dir.join(format!(".{}.tmp", key));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        tracing::debug!(key, bytes = value.len(), "wrote storage key");
        Ok(())
    }
}

/// In-process storage, for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key directly, bypassing any store
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
