//! Access token storage. The token is set once the second sign-in step
//! succeeds, read by admin requests, and cleared on sign-out. The browser
//! implementation keeps it in `localStorage`; nothing here logs token values.

use std::cell::RefCell;

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// Process-wide holder of the session token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

/// In-memory store, used where no browser storage exists.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

/// Token store backed by `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.trim().is_empty())
    }

    fn store(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                    tracing::warn!("failed to persist access token");
                }
            }
            None => tracing::warn!("localStorage unavailable; access token not persisted"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(TOKEN_STORAGE_KEY).is_err() {
                tracing::warn!("failed to remove access token from localStorage");
            }
        }
    }
}

/// Builds the `Authorization` header for the stored token, if any.
pub fn bearer_headers(store: &impl TokenStore) -> Vec<(String, String)> {
    store
        .load()
        .map(|token| vec![("Authorization".to_string(), format!("Bearer {token}"))])
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{MemoryTokenStore, TokenStore, bearer_headers};

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.load(), None);

        store.store("abc");
        assert_eq!(store.load(), Some("abc".to_string()));

        store.store("def");
        assert_eq!(store.load(), Some("def".to_string()));

        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn bearer_headers_only_present_with_token() {
        let store = MemoryTokenStore::default();
        assert!(bearer_headers(&store).is_empty());

        store.store("tok");
        assert_eq!(
            bearer_headers(&store),
            vec![("Authorization".to_string(), "Bearer tok".to_string())]
        );
    }
}
