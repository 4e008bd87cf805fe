//! In-memory session store for tests and ephemeral sessions.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::{SessionStore, SessionStoreError};

/// Session store that keeps values in memory only.
///
/// Nothing survives process teardown; useful for tests and for running
/// without a writable data directory. Clones share the same map, so a test
/// can hold one handle while the session manager writes through another.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    map: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_map<T>(&self, f: impl FnOnce(&mut BTreeMap<String, String>) -> T) -> T {
        let mut map = self.map.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut map)
    }
}

impl SessionStore for MemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        Ok(self.with_map(|map| map.get(key).cloned()))
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.with_map(|map| map.insert(key.to_string(), value.to_string()));
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SessionStoreError> {
        self.with_map(|map| map.remove(key));
        Ok(())
    }
}
