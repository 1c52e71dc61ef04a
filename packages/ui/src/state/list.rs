//! Notes list state machine.

use api::NotesApi;
use store::{KeyValueStore, Note, SessionStore};

use super::authorized;

/// Shown when the list could not be fetched for a reason other than auth.
pub const LIST_FAILED_MESSAGE: &str = "Could not load your notes. Please try again.";

/// What the notes list is currently showing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListState {
    #[default]
    Loading,
    /// Notes in backend order; empty renders the "no notes" placeholder.
    Ready(Vec<Note>),
    /// No usable session; the view navigates to sign-in and renders nothing.
    Redirecting,
    Failed(String),
}

impl ListState {
    pub fn notes(&self) -> &[Note] {
        match self {
            ListState::Ready(notes) => notes.as_slice(),
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }
}

/// Fetch the list for the current session and return the state to show.
///
/// A missing token redirects without contacting the backend; a 401 clears the
/// session and redirects. Every other failure is logged and becomes `Failed`.
pub async fn load_notes<A, S>(api: &A, session: &SessionStore<S>) -> ListState
where
    A: NotesApi,
    S: KeyValueStore,
{
    let result = authorized(session, |token| async move {
        api.list_notes(Some(token.as_str())).await
    })
    .await;

    match result {
        Ok(notes) => ListState::Ready(notes),
        Err(err) if err.is_unauthorized() => ListState::Redirecting,
        Err(err) => {
            match err.status() {
                Some(status) => tracing::error!("Error fetching notes (HTTP {status}): {err}"),
                None => tracing::error!("Error fetching notes: {err}"),
            }
            ListState::Failed(LIST_FAILED_MESSAGE.to_string())
        }
    }
}
