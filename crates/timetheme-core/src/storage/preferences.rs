//! Key-value preference seam

use crate::error::Result;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Durable string key-value storage used for theme preferences
pub trait PreferenceStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never written
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value. Returns whether the key existed.
    fn remove(&self, key: &str) -> Result<bool>;
}

/// Process-local store backed by a map
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing entries
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let values = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            values: Mutex::new(values),
        }
    }

    /// Copy of everything currently stored
    pub fn entries(&self) -> HashMap<String, String> {
        self.values.lock().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.values.lock().remove(key).is_some())
    }
}
