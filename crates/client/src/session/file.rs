//! File-backed session store.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tokio::sync::Mutex;

use super::{SessionStore, SessionStoreError};

/// Session store persisted as a single JSON object on disk.
///
/// Each mutation rewrites the whole file, which is fine at this scale: the
/// store only ever holds the two session keys. A lock serializes the
/// read-modify-write cycle so concurrent writers cannot interleave.
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    /// Create a store backed by the file at `path`.
    ///
    /// The file is created lazily on the first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, SessionStoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, map: &BTreeMap<String, String>) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(map)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        let _guard = self.lock.lock().await;
        let mut map = self.load().await?;
        map.insert(key.to_string(), value.to_string());
        self.save(&map).await
    }

    async fn remove(&self, key: &str) -> Result<(), SessionStoreError> {
        let _guard = self.lock.lock().await;
        let mut map = self.load().await?;
        if map.remove(key).is_some() {
            self.save(&map).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::keys;

    #[tokio::test]
    async fn test_put_get_remove_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSessionStore::new(dir.path().join("session.json"));

        assert_eq!(store.get(keys::AUTH_TOKEN).await.expect("get"), None);

        store.put(keys::AUTH_TOKEN, "abc123").await.expect("put");
        assert_eq!(
            store.get(keys::AUTH_TOKEN).await.expect("get"),
            Some("abc123".to_string())
        );

        store.remove(keys::AUTH_TOKEN).await.expect("remove");
        assert_eq!(store.get(keys::AUTH_TOKEN).await.expect("get"), None);
    }

    #[tokio::test]
    async fn test_remove_absent_key_is_noop() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSessionStore::new(dir.path().join("session.json"));

        store.remove(keys::AUTH_USER).await.expect("remove");
        assert_eq!(store.get(keys::AUTH_USER).await.expect("get"), None);
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        {
            let store = FileSessionStore::new(&path);
            store.put(keys::AUTH_USER, r#"{"id":1}"#).await.expect("put");
        }

        let reopened = FileSessionStore::new(&path);
        assert_eq!(
            reopened.get(keys::AUTH_USER).await.expect("get"),
            Some(r#"{"id":1}"#.to_string())
        );
    }
}
