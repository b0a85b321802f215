// --- File: crates/barberbook_session/src/storage.rs ---

//! Key/value storage backends for the session.
//!
//! The session only ever stores two string values, so the storage contract is
//! a flat string map. `FileStorage` keeps the map in one JSON document on
//! disk; `MemoryStorage` keeps it in process.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::error::SessionError;

pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// A JSON object of string values persisted to a single file.
///
/// Every operation re-reads the file, so values written by another process
/// are seen on the next access. Writes go to a sibling temp file first and are
/// renamed into place.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

type StorageMap = BTreeMap<String, String>;

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StorageMap, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(StorageMap::new()),
            Err(err) => return Err(err.into()),
        };
        if raw.trim().is_empty() {
            return Ok(StorageMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    /// Like `load`, but a corrupt file is replaced rather than reported.
    fn load_for_write(&self) -> Result<StorageMap, SessionError> {
        match self.load() {
            Err(SessionError::Serialization(err)) => {
                warn!(path = %self.path.display(), "Discarding unreadable storage file: {}", err);
                Ok(StorageMap::new())
            }
            other => other,
        }
    }

    fn persist(&self, map: &StorageMap) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(map)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), keys = map.len(), "Storage written");
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let _guard = self.lock.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let _guard = self.lock.lock().map_err(|_| SessionError::Poisoned)?;
        let mut map = self.load_for_write()?;
        map.insert(key.to_string(), value.to_string());
        self.persist(&map)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let _guard = self.lock.lock().map_err(|_| SessionError::Poisoned)?;
        let mut map = self.load_for_write()?;
        if map.remove(key).is_some() {
            self.persist(&map)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let values = self.values.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut values = self.values.lock().map_err(|_| SessionError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut values = self.values.lock().map_err(|_| SessionError::Poisoned)?;
        values.remove(key);
        Ok(())
    }
}
