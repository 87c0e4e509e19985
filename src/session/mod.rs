//! Persisted session: the bearer token and user identity that survive restarts.
//!
//! [`KeyValueStore`] is the storage seam; [`Session`] is the only writer and
//! is passed to whatever needs the token instead of being read globally.

pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::constants::{KEY_TOKEN, KEY_USERNAME, KEY_USER_ID};

pub use store::{FileStore, MemoryStore};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session storage is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// String key-value persistence.
///
/// Reads never fail: a store that cannot be read behaves as empty, and the
/// gateway's response codes are the only judge of whether a token is valid.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    async fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// Token, username and user id for the signed-in user.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn KeyValueStore>,
}

impl Session {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Session kept only in memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Persist a fresh login. A missing user id clears any stale one.
    pub async fn login(&self, token: &str, username: &str, user_id: Option<&str>) -> Result<(), SessionError> {
        self.store.set(KEY_TOKEN, token).await?;
        self.store.set(KEY_USERNAME, username).await?;
        match user_id {
            Some(id) => self.store.set(KEY_USER_ID, id).await?,
            None => self.store.remove(KEY_USER_ID).await?,
        }
        info!("Session stored for {}", username);
        Ok(())
    }

    pub async fn logout(&self) -> Result<(), SessionError> {
        self.store.remove(KEY_TOKEN).await?;
        self.store.remove(KEY_USERNAME).await?;
        self.store.remove(KEY_USER_ID).await?;
        debug!("Session cleared");
        Ok(())
    }

    pub async fn current_token(&self) -> Option<String> {
        self.store.get(KEY_TOKEN).await.filter(|t| !t.is_empty())
    }

    pub async fn username(&self) -> Option<String> {
        self.store.get(KEY_USERNAME).await
    }

    pub async fn user_id(&self) -> Option<String> {
        self.store.get(KEY_USER_ID).await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current_token().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn login_then_logout() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated().await);

        session.login("tok", "ana", Some("u1")).await.unwrap();
        assert_eq!(session.current_token().await.as_deref(), Some("tok"));
        assert_eq!(session.username().await.as_deref(), Some("ana"));
        assert_eq!(session.user_id().await.as_deref(), Some("u1"));

        session.logout().await.unwrap();
        assert_eq!(session.current_token().await, None);
        assert_eq!(session.username().await, None);
        assert_eq!(session.user_id().await, None);
    }

    #[tokio::test]
    async fn relogin_without_user_id_drops_the_old_one() {
        let session = Session::in_memory();
        session.login("tok", "ana", Some("u1")).await.unwrap();
        session.login("tok2", "bea", None).await.unwrap();
        assert_eq!(session.user_id().await, None);
    }

    #[tokio::test]
    async fn empty_token_is_not_a_session() {
        let store = Arc::new(MemoryStore::new());
        store.set(KEY_TOKEN, "").await.unwrap();
        let session = Session::new(store);
        assert!(!session.is_authenticated().await);
    }
}
