//! Session context and hooks for the UI.

use api::NotesClient;
use dioxus::prelude::*;
use store::{ClientConfig, Session, SessionStore, StoreError, UserProfile};

use crate::platform::{load_client_config, make_session_store, PlatformStore};

/// Everything an authenticated view needs: the persistent session, the backend
/// client, and a signal mirroring the stored session for rendering.
#[derive(Clone)]
pub struct SessionContext {
    pub store: SessionStore<PlatformStore>,
    pub client: NotesClient,
    pub current: Signal<Session>,
}

impl SessionContext {
    pub fn read(&self) -> Session {
        self.current.read().clone()
    }

    pub fn save(&self, token: &str, user: &UserProfile) -> Result<(), StoreError> {
        self.store.save(token, user)
    }

    pub fn clear(&self) {
        self.store.clear();
    }
}

/// Get the session context installed by [`SessionProvider`].
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Provider component that owns the session store and the notes client.
/// Wrap your app with this component; `current` follows every `save`/`clear`.
#[component]
pub fn SessionProvider(
    #[props(default = load_client_config())] config: ClientConfig,
    children: Element,
) -> Element {
    let store = use_hook(|| make_session_store(&config));
    let current = use_signal({
        let store = store.clone();
        move || store.read()
    });

    let subscription = use_hook({
        let store = store.clone();
        move || {
            store.subscribe(move |session: &Session| {
                let mut current = current;
                current.set(session.clone());
            })
        }
    });

    use_drop({
        let store = store.clone();
        move || store.unsubscribe(subscription)
    });

    use_context_provider(|| {
        tracing::info!("Using notes backend at {}", config.base_url());
        SessionContext {
            store,
            client: NotesClient::new(&config),
            current,
        }
    });

    rsx! {
        {children}
    }
}
