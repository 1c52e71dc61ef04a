//! Note editor dialog state machine.
//!
//! The dialog is either creating a note or editing one, decided only by whether a
//! backing [`Note`] was supplied. Submitting validates first and then hands the
//! caller a [`Mutation`] to run with [`perform`]; the result goes back through
//! [`EditorState::finish`], which says whether the dialog should close.
//!
//! Submit and delete are mutually exclusive: while one is in flight the other's
//! control is disabled and `begin_*` refuses to start it.

use api::{ApiError, NotesApi};
use store::{KeyValueStore, Note, SessionStore};

use super::authorized;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const CONTENT_REQUIRED: &str = "Content is required";
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Debug, PartialEq)]
pub enum EditorMode {
    Create,
    Edit(Note),
}

impl EditorMode {
    pub fn from_note(note: Option<Note>) -> Self {
        match note {
            Some(note) => EditorMode::Edit(note),
            None => EditorMode::Create,
        }
    }

    pub fn note(&self) -> Option<&Note> {
        match self {
            EditorMode::Create => None,
            EditorMode::Edit(note) => Some(note),
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            EditorMode::Create => "Add Note",
            EditorMode::Edit(_) => "Edit Note",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub title: Option<&'static str>,
    pub content: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditorStatus {
    #[default]
    Idle,
    Submitting,
    Deleting,
    ValidationFailed,
    RequestFailed(String),
}

/// A backend call the dialog wants performed.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    Create { title: String, content: String },
    Update { id: String, title: String, content: String },
    Delete { id: String },
}

/// What the dialog should do once a mutation has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorOutcome {
    /// Close the dialog and refresh the list.
    Close,
    /// Stay open so the user can retry.
    StayOpen,
    /// The session is gone; close and send the user to sign-in.
    SignInRequired,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    pub mode: EditorMode,
    pub title: String,
    pub content: String,
    pub errors: FieldErrors,
    pub status: EditorStatus,
    open: bool,
}

impl EditorState {
    pub fn new(note: Option<Note>) -> Self {
        let mut state = Self {
            mode: EditorMode::Create,
            title: String::new(),
            content: String::new(),
            errors: FieldErrors::default(),
            status: EditorStatus::Idle,
            open: false,
        };
        state.reset(note);
        state
    }

    /// Repopulate the fields from `note` (or clear them) and drop any errors.
    ///
    /// A request still in flight keeps its status, so reopening the dialog cannot
    /// start a second mutation alongside it.
    pub fn reset(&mut self, note: Option<Note>) {
        match &note {
            Some(note) => {
                self.title = note.title.clone();
                self.content = note.content.clone();
            }
            None => {
                self.title.clear();
                self.content.clear();
            }
        }
        self.mode = EditorMode::from_note(note);
        self.errors = FieldErrors::default();
        if !self.is_busy() {
            self.status = EditorStatus::Idle;
        }
    }

    /// Whether [`sync`](Self::sync) would reset the form.
    pub fn needs_sync(&self, open: bool, note: Option<&Note>) -> bool {
        open != self.open || (open && self.mode.note() != note)
    }

    /// Track the dialog's `open` flag and backing note. The form is reset when the
    /// dialog opens, or when the note changes while it is open.
    pub fn sync(&mut self, open: bool, note: Option<&Note>) {
        let reopened = open && !self.open;
        let swapped = open && self.mode.note() != note;
        self.open = open;
        if reopened || swapped {
            self.reset(note.cloned());
        }
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn validate(&mut self) -> bool {
        self.errors = FieldErrors {
            title: self.title.trim().is_empty().then_some(TITLE_REQUIRED),
            content: self.content.trim().is_empty().then_some(CONTENT_REQUIRED),
        };
        self.errors.is_empty()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.status, EditorStatus::Submitting | EditorStatus::Deleting)
    }

    pub fn can_delete(&self) -> bool {
        matches!(self.mode, EditorMode::Edit(_))
    }

    pub fn submit_disabled(&self) -> bool {
        self.is_busy()
    }

    pub fn delete_disabled(&self) -> bool {
        self.is_busy()
    }

    /// The message to show above the buttons after a failed request.
    pub fn alert(&self) -> Option<&str> {
        match &self.status {
            EditorStatus::RequestFailed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Validate and, when the form is fine, move to `Submitting`.
    pub fn begin_submit(&mut self) -> Option<Mutation> {
        if self.is_busy() {
            return None;
        }
        if !self.validate() {
            self.status = EditorStatus::ValidationFailed;
            return None;
        }
        self.status = EditorStatus::Submitting;
        let title = self.title.clone();
        let content = self.content.clone();
        Some(match &self.mode {
            EditorMode::Create => Mutation::Create { title, content },
            EditorMode::Edit(note) => Mutation::Update {
                id: note.id.clone(),
                title,
                content,
            },
        })
    }

    /// Move to `Deleting`. Only possible when editing an existing note.
    pub fn begin_delete(&mut self) -> Option<Mutation> {
        if self.is_busy() {
            return None;
        }
        let EditorMode::Edit(note) = &self.mode else {
            return None;
        };
        let id = note.id.clone();
        self.status = EditorStatus::Deleting;
        Some(Mutation::Delete { id })
    }

    /// Apply the result of the mutation started by `begin_submit`/`begin_delete`.
    pub fn finish(&mut self, result: Result<(), ApiError>) -> EditorOutcome {
        let was_submitting = self.status == EditorStatus::Submitting;
        match result {
            Ok(()) => {
                if was_submitting && self.mode == EditorMode::Create {
                    self.title.clear();
                    self.content.clear();
                }
                self.status = EditorStatus::Idle;
                EditorOutcome::Close
            }
            Err(err) if err.is_unauthorized() => {
                self.status = EditorStatus::Idle;
                EditorOutcome::SignInRequired
            }
            Err(err) => {
                tracing::error!("Note mutation failed: {err}");
                self.status = EditorStatus::RequestFailed(GENERIC_FAILURE.to_string());
                EditorOutcome::StayOpen
            }
        }
    }
}

/// Run a mutation against the backend with the current session.
pub async fn perform<A, S>(
    api: &A,
    session: &SessionStore<S>,
    mutation: &Mutation,
) -> Result<(), ApiError>
where
    A: NotesApi,
    S: KeyValueStore,
{
    authorized(session, |token| async move {
        let bearer = Some(token.as_str());
        match mutation {
            Mutation::Create { title, content } => {
                api.create_note(bearer, title, content).await.map(drop)
            }
            Mutation::Update { id, title, content } => {
                api.update_note(bearer, id, title, content).await.map(drop)
            }
            Mutation::Delete { id } => api.delete_note(bearer, id).await,
        }
    })
    .await
}
