//! File-backed storage backend

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Error;

use super::LocalStore;

/// Durable storage backed by a single JSON file of key -> value pairs
///
/// The file is read in full on every access and rewritten in full on every
/// mutation; a missing file reads as an empty store, and an unreadable or
/// corrupt file is discarded rather than treated as fatal.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles against the backing file.
    lock: Mutex<()>,
}

impl FileStore {
    /// Create a store backed by the file at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_owned(),
            lock: Mutex::new(()),
        }
    }

    fn read_entries(&self) -> Result<HashMap<String, String>, Error> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                log::warn!("discarding corrupt store file {}: {}", self.path.display(), e);
                Ok(HashMap::new())
            }
        }
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl LocalStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let _guard = self.lock.lock().unwrap();
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let _guard = self.lock.lock().unwrap();
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let _guard = self.lock.lock().unwrap();
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store.json"));
        assert_eq!(store.get("token").unwrap(), None);
    }

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = FileStore::new(&path);
        store.set("token", "abc").unwrap();
        drop(store);

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("token").unwrap().as_deref(), Some("abc"));
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json at all").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.get("user").unwrap(), None);

        // A write replaces the corrupt content with a valid store
        store.set("user", "{}").unwrap();
        assert_eq!(store.get("user").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested/deeper/store.json"));
        store.set("user", "x").unwrap();
        assert_eq!(store.get("user").unwrap().as_deref(), Some("x"));
    }
}
