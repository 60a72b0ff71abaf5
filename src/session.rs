//! Session token persistence

use gloo_storage::{LocalStorage, Storage};
use parking_lot::Mutex;
use std::sync::Arc;

/// Local storage key holding the raw bearer token
pub const STORAGE_KEY_TOKEN: &str = "token";

/// Backing store for the session token
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Browser local storage. The token is stored as a raw string, not JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::raw()
            .get_item(STORAGE_KEY_TOKEN)
            .ok()
            .flatten()
    }

    fn save(&self, token: &str) {
        if LocalStorage::raw().set_item(STORAGE_KEY_TOKEN, token).is_err() {
            tracing::warn!("Failed to persist session token");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(STORAGE_KEY_TOKEN);
    }
}

/// In-memory store, used off-browser
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock() = None;
    }
}

/// Session context handed to everything that issues authenticated requests
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn browser() -> Self {
        Self::new(LocalStorageTokenStore)
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::default())
    }

    /// Current token, if signed in
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.is_empty())
    }

    /// Replace the token; `None` signs out
    pub fn set_token(&self, token: Option<&str>) {
        match token {
            Some(token) => self.store.save(token),
            None => self.store.clear(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("signed_in", &self.token().is_some())
            .finish()
    }
}
