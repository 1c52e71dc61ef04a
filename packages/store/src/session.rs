//! # Session store: the bearer token and user profile
//!
//! [`SessionStore`] is the single owner of the locally persisted authentication
//! state. Views never touch the underlying storage directly; they read, save and
//! clear through this type, which is handed out as a shared context by the UI.
//!
//! ## [`KeyValueStore`] trait
//!
//! A synchronous string-to-string interface (`get`/`set`/`remove`) matching the
//! shape of the browser's `localStorage`. Implementations live in sibling modules:
//! [`crate::MemoryStore`] (tests), `FileStore` (native builds) and
//! `LocalStorageStore` (browser).
//!
//! ## Records
//!
//! | Key (default) | Value |
//! |---------------|-------|
//! | `token` | the raw bearer token |
//! | `user` | JSON `{"name"?, "email"?}` |
//!
//! Keys come from [`SessionKeys`] so they can be overridden in the client config.
//!
//! ## Change notification
//!
//! [`SessionStore::subscribe`] registers a listener that receives the new
//! [`Session`] after every [`save`](SessionStore::save) or
//! [`clear`](SessionStore::clear). The UI uses this to keep its reactive copy of the
//! session in step with storage.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::SessionKeys;
use crate::error::StoreError;
use crate::models::{Session, UserProfile};

/// Synchronous key/value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Rc<dyn Fn(&Session)>;

#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(Subscription, Listener)>>,
}

/// Reads and writes the session records on top of a [`KeyValueStore`].
///
/// Clones share the same backend and listener list.
#[derive(Clone)]
pub struct SessionStore<S: KeyValueStore> {
    backend: S,
    keys: SessionKeys,
    listeners: Rc<Listeners>,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_keys(backend, SessionKeys::default())
    }

    pub fn with_keys(backend: S, keys: SessionKeys) -> Self {
        Self {
            backend,
            keys,
            listeners: Rc::new(Listeners::default()),
        }
    }

    /// Read the current session. Never fails.
    ///
    /// A blank token reads as absent. A user record that is not valid JSON is
    /// logged and replaced by an empty profile.
    pub fn read(&self) -> Session {
        let token = self
            .backend
            .get(&self.keys.token_key)
            .filter(|token| !token.trim().is_empty());

        let user = match self.backend.get(&self.keys.user_key) {
            None => UserProfile::default(),
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!("Ignoring malformed user record in session store: {err}");
                UserProfile::default()
            }),
        };

        Session { token, user }
    }

    /// The bearer token, if one is stored.
    pub fn token(&self) -> Option<String> {
        self.read().token
    }

    /// Persist a freshly issued token and profile.
    pub fn save(&self, token: &str, user: &UserProfile) -> Result<(), StoreError> {
        let user_json = serde_json::to_string(user)?;
        self.backend.set(&self.keys.token_key, token);
        self.backend.set(&self.keys.user_key, &user_json);
        tracing::debug!("Session saved for {}", user.display_name());
        self.notify();
        Ok(())
    }

    /// Remove both records. Calling this on an empty store is a no-op apart from
    /// notifying listeners.
    pub fn clear(&self) {
        self.backend.remove(&self.keys.token_key);
        self.backend.remove(&self.keys.user_key);
        tracing::debug!("Session cleared");
        self.notify();
    }

    /// Register an `on_change` listener.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) -> Subscription {
        let id = Subscription(self.listeners.next_id.get());
        self.listeners.next_id.set(id.0 + 1);
        self.listeners
            .entries
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.listeners
            .entries
            .borrow_mut()
            .retain(|(id, _)| *id != subscription);
    }

    fn notify(&self) {
        // Snapshot first: a listener may subscribe or unsubscribe while running.
        let listeners: Vec<Listener> = self
            .listeners
            .entries
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        if listeners.is_empty() {
            return;
        }
        let session = self.read();
        for listener in listeners {
            listener(&session);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[test]
    fn test_empty_store_reads_anonymous_session() {
        let store = SessionStore::new(MemoryStore::new());
        let session = store.read();
        assert!(session.token.is_none());
        assert_eq!(session.user, UserProfile::default());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_save_then_read() {
        let store = SessionStore::new(MemoryStore::new());
        let user = UserProfile::new(Some("Ada".into()), Some("ada@example.com".into()));
        store.save("tok-123", &user).unwrap();

        let session = store.read();
        assert_eq!(session.token.as_deref(), Some("tok-123"));
        assert_eq!(session.user, user);
    }

    #[test]
    fn test_malformed_user_record_degrades_to_empty_profile() {
        let backend = MemoryStore::new();
        backend.set("token", "tok-123");
        backend.set("user", "{not json");

        let session = SessionStore::new(backend).read();
        assert_eq!(session.token.as_deref(), Some("tok-123"));
        assert_eq!(session.user, UserProfile::default());
    }

    #[test]
    fn test_blank_token_reads_as_absent() {
        let backend = MemoryStore::new();
        backend.set("token", "   ");
        assert!(SessionStore::new(backend).token().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone());
        store.save("tok", &UserProfile::default()).unwrap();

        store.clear();
        store.clear();

        assert!(backend.get("token").is_none());
        assert!(backend.get("user").is_none());
        assert_eq!(store.read(), Session::default());
    }

    #[test]
    fn test_custom_keys() {
        let backend = MemoryStore::new();
        let keys = SessionKeys {
            token_key: "aibrain.token".to_string(),
            user_key: "aibrain.user".to_string(),
        };
        let store = SessionStore::with_keys(backend.clone(), keys);
        store.save("tok", &UserProfile::default()).unwrap();

        assert_eq!(backend.get("aibrain.token").as_deref(), Some("tok"));
        assert!(backend.get("token").is_none());
    }

    #[test]
    fn test_listeners_see_every_change_until_unsubscribed() {
        let store = SessionStore::new(MemoryStore::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let subscription = store.subscribe(move |session| {
            sink.borrow_mut().push(session.token.clone());
        });

        store.save("tok", &UserProfile::default()).unwrap();
        store.clear();
        store.unsubscribe(subscription);
        store.save("ignored", &UserProfile::default()).unwrap();

        assert_eq!(*seen.borrow(), vec![Some("tok".to_string()), None]);
    }

    #[test]
    fn test_clones_share_listeners() {
        let store = SessionStore::new(MemoryStore::new());
        let calls = Rc::new(Cell::new(0));

        let counter = calls.clone();
        store.subscribe(move |_| counter.set(counter.get() + 1));

        store.clone().clear();
        assert_eq!(calls.get(), 1);
    }
}
