//! Per-note AI summary state machine.
//!
//! A card starts in [`SummaryState::NoSummary`]. The first press asks the backend
//! (through [`fetch_summary`]); once a summary is cached, presses only flip it
//! between shown and hidden.

use api::{ApiError, NotesApi};
use store::{KeyValueStore, SessionStore};

use super::authorized;

pub const SUMMARY_FAILED_MESSAGE: &str = "Failed to generate summary. Please try again.";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SummaryState {
    #[default]
    NoSummary,
    Loading,
    Shown(String),
    Hidden(String),
    Failed(String),
}

/// What a press on the summary button asks the caller to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryPress {
    /// Start a request; the state is now `Loading`.
    Fetch,
    /// A cached summary changed visibility. No request.
    Toggled,
    /// A request is already in flight.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryResolution {
    Settled,
    SignInRequired,
}

impl SummaryState {
    pub fn press(&mut self) -> SummaryPress {
        let next = match self {
            SummaryState::Shown(text) => SummaryState::Hidden(std::mem::take(text)),
            SummaryState::Hidden(text) => SummaryState::Shown(std::mem::take(text)),
            SummaryState::Loading => return SummaryPress::Ignored,
            SummaryState::NoSummary | SummaryState::Failed(_) => {
                *self = SummaryState::Loading;
                return SummaryPress::Fetch;
            }
        };
        *self = next;
        SummaryPress::Toggled
    }

    /// Apply the outcome of the request started by [`press`](Self::press).
    pub fn resolve(&mut self, result: Result<String, ApiError>) -> SummaryResolution {
        if !self.is_loading() {
            return SummaryResolution::Settled;
        }
        match result {
            Ok(text) => {
                *self = SummaryState::Shown(text);
                SummaryResolution::Settled
            }
            Err(err) => {
                tracing::error!("Error getting summary: {err}");
                *self = SummaryState::Failed(SUMMARY_FAILED_MESSAGE.to_string());
                if err.is_unauthorized() {
                    SummaryResolution::SignInRequired
                } else {
                    SummaryResolution::Settled
                }
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SummaryState::Loading)
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            SummaryState::NoSummary | SummaryState::Failed(_) => "Get AI Summary",
            SummaryState::Loading => "Generating Summary...",
            SummaryState::Shown(_) => "Hide AI Summary",
            SummaryState::Hidden(_) => "Show AI Summary",
        }
    }

    /// The summary text, only while it is visible.
    pub fn visible_text(&self) -> Option<&str> {
        match self {
            SummaryState::Shown(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SummaryState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Request the summary of `note_id` with the current session.
pub async fn fetch_summary<A, S>(
    api: &A,
    session: &SessionStore<S>,
    note_id: &str,
) -> Result<String, ApiError>
where
    A: NotesApi,
    S: KeyValueStore,
{
    authorized(session, |token| async move {
        api.get_or_create_summary(Some(token.as_str()), note_id).await
    })
    .await
}
