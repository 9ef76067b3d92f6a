//! Session state holder
//!
//! The in-memory [`Session`] is canonical. Durable storage is written through
//! on every change and read only once, when the store is bootstrapped.

use crate::storage::{KeyValueStore, KEY_CIRCUITS, KEY_SESSION_TOKEN, KEY_USERNAME};

/// Who is signed in, if anyone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub username: Option<String>,
}

/// Session plus the storage it mirrors into
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Bootstrap from storage. A present token means authenticated; there is
    /// no expiry check.
    pub fn new(storage: S) -> Self {
        let token = storage.get(KEY_SESSION_TOKEN).filter(|t| !t.is_empty());
        let session = match token {
            Some(_) => Session {
                authenticated: true,
                username: storage.get(KEY_USERNAME),
            },
            None => Session::default(),
        };
        tracing::debug!(authenticated = session.authenticated, "Session bootstrapped");
        Self { storage, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn username(&self) -> Option<&str> {
        self.session.username.as_deref()
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(KEY_SESSION_TOKEN)
    }

    /// Signing in as someone else drops the cached history of the
    /// previous user.
    pub fn sign_in(&mut self, token: &str, username: &str) {
        if self.storage.get(KEY_USERNAME).as_deref() != Some(username) {
            self.storage.delete(KEY_CIRCUITS);
        }
        self.storage.set(KEY_SESSION_TOKEN, token);
        self.storage.set(KEY_USERNAME, username);
        self.session = Session {
            authenticated: true,
            username: Some(username.to_string()),
        };
        tracing::info!("Signed in as {}", username);
    }

    pub fn sign_out(&mut self) {
        self.storage.delete(KEY_SESSION_TOKEN);
        self.storage.delete(KEY_USERNAME);
        self.storage.delete(KEY_CIRCUITS);
        if self.session.authenticated {
            tracing::info!("Signed out");
        }
        self.session = Session::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn empty_storage_bootstraps_anonymous() {
        let store = SessionStore::new(MemoryStorage::default());
        assert_eq!(store.session(), &Session::default());
    }

    #[test]
    fn stored_token_bootstraps_authenticated() {
        let storage = MemoryStorage::default();
        storage.set(KEY_SESSION_TOKEN, "abc");
        storage.set(KEY_USERNAME, "ada");

        let store = SessionStore::new(storage);
        assert!(store.session().authenticated);
        assert_eq!(store.username(), Some("ada"));
    }

    #[test]
    fn username_without_token_is_not_a_session() {
        let storage = MemoryStorage::default();
        storage.set(KEY_USERNAME, "ada");
        let store = SessionStore::new(storage);
        assert!(!store.session().authenticated);
        assert_eq!(store.username(), None);
    }

    #[test]
    fn sign_in_writes_through_to_storage() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new(storage.clone());
        store.sign_in("sess-42", "ada");

        assert!(store.session().authenticated);
        assert_eq!(storage.get(KEY_SESSION_TOKEN).as_deref(), Some("sess-42"));
        assert_eq!(storage.get(KEY_USERNAME).as_deref(), Some("ada"));

        // A reload sees the same session
        let reloaded = SessionStore::new(storage);
        assert_eq!(reloaded.session(), store.session());
    }

    #[test]
    fn sign_out_clears_storage() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new(storage.clone());
        store.sign_in("sess-42", "ada");
        store.sign_out();

        assert!(!store.session().authenticated);
        assert!(store.username().is_none());
        assert!(storage.get(KEY_SESSION_TOKEN).is_none());
        assert!(storage.get(KEY_USERNAME).is_none());
    }

    #[test]
    fn history_cache_does_not_outlive_its_user() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new(storage.clone());

        store.sign_in("sess-1", "ada");
        storage.set(KEY_CIRCUITS, r#"[{"name":"Bell"}]"#);
        store.sign_out();
        assert!(storage.get(KEY_CIRCUITS).is_none());

        // Switching user without signing out also drops it
        store.sign_in("sess-2", "ada");
        storage.set(KEY_CIRCUITS, r#"[{"name":"Bell"}]"#);
        store.sign_in("sess-3", "ada");
        assert!(storage.get(KEY_CIRCUITS).is_some());
        store.sign_in("sess-4", "grace");
        assert!(storage.get(KEY_CIRCUITS).is_none());
    }

    #[test]
    fn authenticated_iff_token_present() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new(storage.clone());
        for i in 0..4 {
            if i % 2 == 0 {
                store.sign_in(&format!("tok-{i}"), "ada");
            } else {
                store.sign_out();
            }
            assert_eq!(
                store.session().authenticated,
                storage.get(KEY_SESSION_TOKEN).is_some()
            );
        }
    }
}
