//! Recording [`NotesApi`] double for state machine tests.

use std::cell::{Cell, RefCell};

use api::{ApiError, NotesApi};
use store::models::parse_timestamp;
use store::Note;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    List,
    Create { title: String, content: String },
    Update { id: String, title: String, content: String },
    Delete { id: String },
    Summary { note_id: String },
}

#[derive(Default)]
pub struct FakeApi {
    calls: RefCell<Vec<(Call, Option<String>)>>,
    fail_with: Cell<Option<u16>>,
    notes: RefCell<Vec<Note>>,
    summary: RefCell<String>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        let api = Self::default();
        *api.notes.borrow_mut() = notes;
        api
    }

    pub fn with_summary(summary: &str) -> Self {
        let api = Self::default();
        *api.summary.borrow_mut() = summary.to_string();
        api
    }

    /// Make every following call fail with this HTTP status.
    pub fn fail_with(&self, status: u16) {
        self.fail_with.set(Some(status));
    }

    pub fn succeed(&self) {
        self.fail_with.set(None);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().iter().map(|(call, _)| call.clone()).collect()
    }

    pub fn tokens(&self) -> Vec<Option<String>> {
        self.calls
            .borrow()
            .iter()
            .map(|(_, token)| token.clone())
            .collect()
    }

    fn record(&self, call: Call, token: Option<&str>) -> Result<(), ApiError> {
        self.calls
            .borrow_mut()
            .push((call, token.map(str::to_string)));
        match self.fail_with.get() {
            Some(status) => Err(ApiError::RequestFailed { status }),
            None => Ok(()),
        }
    }
}

pub fn note(id: &str, title: &str, content: &str) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        created_at: parse_timestamp("2024-01-01").unwrap(),
        updated_at: parse_timestamp("2024-01-01").unwrap(),
        user_id: "user-1".to_string(),
    }
}

impl NotesApi for FakeApi {
    async fn list_notes(&self, token: Option<&str>) -> Result<Vec<Note>, ApiError> {
        self.record(Call::List, token)?;
        Ok(self.notes.borrow().clone())
    }

    async fn create_note(
        &self,
        token: Option<&str>,
        title: &str,
        content: &str,
    ) -> Result<Note, ApiError> {
        self.record(
            Call::Create {
                title: title.to_string(),
                content: content.to_string(),
            },
            token,
        )?;
        Ok(note("new", title, content))
    }

    async fn update_note(
        &self,
        token: Option<&str>,
        id: &str,
        title: &str,
        content: &str,
    ) -> Result<Note, ApiError> {
        self.record(
            Call::Update {
                id: id.to_string(),
                title: title.to_string(),
                content: content.to_string(),
            },
            token,
        )?;
        Ok(note(id, title, content))
    }

    async fn delete_note(&self, token: Option<&str>, id: &str) -> Result<(), ApiError> {
        self.record(Call::Delete { id: id.to_string() }, token)
    }

    async fn get_or_create_summary(
        &self,
        token: Option<&str>,
        note_id: &str,
    ) -> Result<String, ApiError> {
        self.record(
            Call::Summary {
                note_id: note_id.to_string(),
            },
            token,
        )?;
        Ok(self.summary.borrow().clone())
    }
}
