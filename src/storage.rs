//! Session-scoped key/value storage.
//!
//! The sidebar only ever touches one key, but the interface is the usual
//! get/set/remove so a browser-backed store, a file-backed store or the
//! in-memory one here can be swapped in.

use std::collections::HashMap;

/// Default key for the remembered sidebar scroll offset.
pub const SCROLL_KEY: &str = "sidebar-scroll";

/// A string key/value store that lives for one browsing session.
pub trait SessionStorage {
    /// Value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Delete `key`; missing keys are ignored.
    fn remove(&mut self, key: &str);

    /// Read a key and delete it in one step.
    fn take(&mut self, key: &str) -> Option<String> {
        let value = self.get(key);
        self.remove(key);
        value
    }
}

/// In-memory [`SessionStorage`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl<S: SessionStorage + ?Sized> SessionStorage for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }
}

impl<S: SessionStorage + ?Sized> SessionStorage for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }
}
