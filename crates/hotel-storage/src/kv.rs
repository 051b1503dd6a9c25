use serde_json::{Map, Value};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::Path;

use crate::{Error, Result};

/// Browser-style string key/value storage.
///
/// Methods take `&self`: the page only ever holds shared handles to storage,
/// and everything runs on one thread.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    /// Removing a missing key is a no-op
    fn remove_item(&self, key: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
    fn keys(&self) -> Result<Vec<String>>;
}

/// In-process storage backend, optionally seeded from a JSON snapshot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a JSON object of `key -> value`.
    ///
    /// String values are stored verbatim; any other JSON value is stored
    /// in its serialized form, the way pages `JSON.stringify` before writing.
    pub fn from_snapshot_value(snapshot: Value) -> Result<Self> {
        let Value::Object(entries) = snapshot else {
            return Err(Error::Snapshot("expected a JSON object at top level".to_string()));
        };

        let store = Self::new();
        for (key, value) in entries {
            let raw = match value {
                Value::String(s) => s,
                other => serde_json::to_string(&other)?,
            };
            store.items.borrow_mut().insert(key, raw);
        }
        Ok(store)
    }

    pub fn load_snapshot(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;
        let store = Self::from_snapshot_value(value)?;
        tracing::debug!(path = %path.display(), keys = store.len(), "storage snapshot loaded");
        Ok(store)
    }

    /// Inverse of `from_snapshot_value`: values that parse as JSON are written as JSON.
    pub fn to_snapshot_value(&self) -> Value {
        let entries: Map<String, Value> = self
            .items
            .borrow()
            .iter()
            .map(|(key, raw)| {
                let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.clone()));
                (key.clone(), value)
            })
            .collect();
        Value::Object(entries)
    }

    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.to_snapshot_value())?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.items.borrow_mut().clear();
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.items.borrow().keys().cloned().collect())
    }
}
