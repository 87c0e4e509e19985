//! [`KeyValueStore`] implementations.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::warn;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::{KeyValueStore, SessionError};

/// Process-local store. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.lock().await.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

/// A flat JSON object on disk, rewritten on every change.
///
/// The file is read on first access and cached; the cache is only replaced
/// after a successful write.
pub struct FileStore {
    path: PathBuf,
    cache: Mutex<Option<HashMap<String, String>>>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    /// `<data dir>/taskgate/session.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join("taskgate").join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> HashMap<String, String> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                warn!("Failed to read session file {}: {}", self.path.display(), e);
                return HashMap::new();
            }
        };

        serde_json::from_str(&data).unwrap_or_else(|e| {
            warn!("Ignoring corrupt session file {}: {}", self.path.display(), e);
            HashMap::new()
        })
    }

    async fn persist(&self, entries: &HashMap<String, String>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(entries)?;

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        // Owner-only from the moment the file is created
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&self.path).await?;
        file.write_all(json.as_bytes()).await?;
        file.flush().await?;

        // `mode` only applies on creation; tighten a file left by an older run
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            if let Err(e) = tokio::fs::set_permissions(&self.path, perms).await {
                warn!("Failed to restrict permissions on {}: {}", self.path.display(), e);
            }
        }

        Ok(())
    }

    async fn update<F>(&self, change: F) -> Result<(), SessionError>
    where
        F: FnOnce(&mut HashMap<String, String>),
    {
        let mut cache = self.cache.lock().await;
        let mut entries = match cache.as_ref() {
            Some(entries) => entries.clone(),
            None => self.load().await,
        };
        change(&mut entries);
        self.persist(&entries).await?;
        *cache = Some(entries);
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.load().await);
        }
        cache.as_ref().and_then(|entries| entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
        .await
    }

    async fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.update(|entries| {
            entries.remove(key);
        })
        .await
    }
}
