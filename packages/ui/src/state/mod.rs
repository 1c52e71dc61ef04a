//! # Client-side state machines
//!
//! The three pieces of sequential logic in the app, written as plain tagged enums so
//! they can be driven and tested without a renderer:
//!
//! | Module | Machine |
//! |--------|---------|
//! | [`list`] | Notes list: `Loading → Ready / Redirecting / Failed` |
//! | [`summary`] | Per-note AI summary: `NoSummary → Loading → Shown / Hidden / Failed` |
//! | [`editor`] | Create/edit dialog: `Idle → Submitting / Deleting → closed / ValidationFailed / RequestFailed` |
//!
//! Components own one of these inside a `Signal` and apply transitions from event
//! handlers. Network work runs through [`authorized`], which reads the token from the
//! session store and drops the session when the backend rejects it.

use std::future::Future;

use api::ApiError;
use store::{KeyValueStore, SessionStore};

pub mod editor;
pub mod list;
pub mod summary;

#[cfg(test)]
pub(crate) mod fake;

pub use editor::{EditorMode, EditorOutcome, EditorState, EditorStatus, FieldErrors, Mutation};
pub use list::ListState;
pub use summary::{SummaryPress, SummaryResolution, SummaryState};

/// Run `call` with the current bearer token.
///
/// Without a token the call is skipped entirely and `Unauthenticated` is returned.
/// When the backend answers 401 the session is cleared before the error is handed
/// back, so every caller only has to redirect.
pub async fn authorized<S, T, F, Fut>(session: &SessionStore<S>, call: F) -> Result<T, ApiError>
where
    S: KeyValueStore,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let Some(token) = session.token() else {
        return Err(ApiError::Unauthenticated);
    };

    let result = call(token).await;
    if let Err(err) = &result {
        if err.is_unauthorized() {
            tracing::warn!("Session rejected by the backend, signing out");
            session.clear();
        }
    }
    result
}
