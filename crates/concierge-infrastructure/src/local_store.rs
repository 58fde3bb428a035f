//! File-backed local key-value store.
//!
//! Mirrors the browser's local persistent storage: a tiny string-to-string
//! map cached in memory and written through to a TOML file. Only two keys
//! are used in practice (the chat session id and the returning-visitor
//! flag), so the whole map is rewritten on every set.

use async_trait::async_trait;
use concierge_core::error::Result;
use concierge_core::store::LocalStore;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::paths::ConciergePaths;

/// A `LocalStore` over a TOML map file.
pub struct FileLocalStore {
    path: PathBuf,
    /// Cached map loaded from storage; writes go through to disk.
    cache: Mutex<BTreeMap<String, String>>,
}

impl FileLocalStore {
    /// Opens the store at the default location (`~/.config/concierge/local_store.toml`).
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or the
    /// existing file cannot be read or parsed.
    pub async fn default_location() -> Result<Self> {
        let path = ConciergePaths::local_store_file()
            .map_err(|e| concierge_core::ConciergeError::config(e.to_string()))?;
        Self::new(path).await
    }

    /// Opens the store at `path`, loading the existing map if the file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let cache = if fs::try_exists(&path).await? {
            let content = fs::read_to_string(&path).await?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                toml::from_str(&content)?
            }
        } else {
            tracing::debug!(path = %path.display(), "local store file absent, starting empty");
            BTreeMap::new()
        };

        Ok(Self {
            path,
            cache: Mutex::new(cache),
        })
    }

    async fn persist(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string(map)?;
        fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl LocalStore for FileLocalStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let cache = self.cache.lock().await;
        Ok(cache.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut cache = self.cache.lock().await;
        cache.insert(key.to_string(), value.to_string());
        self.persist(&cache).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::store::SESSION_ID_KEY;

    #[tokio::test]
    async fn test_get_on_fresh_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileLocalStore::new(dir.path().join("local_store.toml"))
            .await
            .unwrap();
        assert!(store.get(SESSION_ID_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileLocalStore::new(dir.path().join("local_store.toml"))
            .await
            .unwrap();

        store.set(SESSION_ID_KEY, "session_1_abc").await.unwrap();
        assert_eq!(
            store.get(SESSION_ID_KEY).await.unwrap().as_deref(),
            Some("session_1_abc")
        );
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_store.toml");

        {
            let store = FileLocalStore::new(&path).await.unwrap();
            store.set("returning_visitor", "true").await.unwrap();
        }

        let reopened = FileLocalStore::new(&path).await.unwrap();
        assert_eq!(
            reopened.get("returning_visitor").await.unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("store.toml");

        let store = FileLocalStore::new(&path).await.unwrap();
        store.set("k", "v").await.unwrap();
        assert!(path.exists());
    }
}
