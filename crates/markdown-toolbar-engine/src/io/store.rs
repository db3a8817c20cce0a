use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Keys the editor persists between sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Content,
    LastSaved,
    Theme,
    ViewMode,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Content => "markdownContent",
            StorageKey::LastSaved => "lastSaved",
            StorageKey::Theme => "darkMode",
            StorageKey::ViewMode => "viewMode",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to write {key} to {path}: {source}")]
    Write {
        key: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Durable string storage; last write wins
pub trait KeyValueStore {
    fn get(&self, key: StorageKey) -> Option<String>;
    fn set(&mut self, key: StorageKey, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<StorageKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.values.get(&key).cloned()
    }

    fn set(&mut self, key: StorageKey, value: &str) -> Result<(), StoreError> {
        self.values.insert(key, value.to_string());
        Ok(())
    }
}

/// One file per key inside a storage directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: StorageKey) -> PathBuf {
        self.dir.join(key.as_str())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: StorageKey, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let write_error = |source| StoreError::Write {
            key: key.as_str(),
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_error)?;
        fs::write(&path, value).map_err(write_error)
    }
}
