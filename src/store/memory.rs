//! In-memory storage backend

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::Error;

use super::LocalStore;

/// Process-lifetime storage; contents are lost when the client is dropped
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("user").unwrap(), None);

        store.set("user", "{\"id\":1}").unwrap();
        assert_eq!(store.get("user").unwrap().as_deref(), Some("{\"id\":1}"));

        store.remove("user").unwrap();
        assert_eq!(store.get("user").unwrap(), None);

        // Removing a missing key is a no-op
        store.remove("user").unwrap();
    }
}
