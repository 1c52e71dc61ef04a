//! # `reqwest` implementation of [`NotesApi`]
//!
//! [`NotesClient`] holds a shared `reqwest::Client` and the backend base URL. Each
//! operation is a single request/response round trip; nothing is retried.
//!
//! | Operation | Method | Path | Body |
//! |-----------|--------|------|------|
//! | list | `GET` | [`LIST_NOTES`] | |
//! | create | `POST` | [`CREATE_NOTE`] | `{title, content}` |
//! | update | `POST` | [`UPDATE_NOTE`] | `{id, title, content}` |
//! | delete | `DELETE` | [`DELETE_NOTE`] | `{id}` |
//! | summary fetch | `POST` | [`GET_SUMMARY`] | `{noteId}` |
//! | summary create | `POST` | [`CREATE_SUMMARY`] | `{noteId}` |

use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use store::{ClientConfig, Note};

use crate::{ApiError, NotesApi};

pub const LIST_NOTES: &str = "/api/notes/get-all-notes";
pub const CREATE_NOTE: &str = "/api/notes/create-note";
pub const UPDATE_NOTE: &str = "/api/notes/update-note";
pub const DELETE_NOTE: &str = "/api/notes/delete-note";
pub const GET_SUMMARY: &str = "/api/ai/get-summary";
pub const CREATE_SUMMARY: &str = "/api/ai/create-summary";

#[derive(Serialize)]
struct NoteDraft<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct NoteEdit<'a> {
    id: &'a str,
    title: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct NoteRef<'a> {
    id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryRequest<'a> {
    note_id: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    summary: Option<String>,
}

impl SummaryResponse {
    fn into_text(self) -> Option<String> {
        self.summary.filter(|s| !s.trim().is_empty())
    }
}

/// HTTP client for the notes backend.
#[derive(Clone, Debug)]
pub struct NotesClient {
    http: reqwest::Client,
    base_url: String,
}

impl NotesClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_base_url(config.base_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(token: Option<&str>) -> Result<String, ApiError> {
        match token {
            Some(token) if !token.trim().is_empty() => Ok(format!("Bearer {token}")),
            _ => Err(ApiError::Unauthenticated),
        }
    }

    /// Send an authorized request and turn any non-2xx status into an error.
    async fn send(
        &self,
        token: Option<&str>,
        request: RequestBuilder,
        path: &str,
    ) -> Result<Response, ApiError> {
        let bearer = Self::bearer(token)?;
        tracing::debug!("Calling {path}");
        let response = request.header(AUTHORIZATION, bearer).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::error!("{path} failed with status {status}");
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn read_note(response: Response) -> Result<Note, ApiError> {
        response
            .json::<Note>()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    /// Summary endpoints may answer with an empty body when there is nothing yet.
    async fn read_summary(response: Response) -> Result<SummaryResponse, ApiError> {
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(SummaryResponse::default());
        }
        serde_json::from_str(&body).map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }
}

impl NotesApi for NotesClient {
    async fn list_notes(&self, token: Option<&str>) -> Result<Vec<Note>, ApiError> {
        let request = self.http.get(self.url(LIST_NOTES));
        let response = self.send(token, request, LIST_NOTES).await?;
        response
            .json::<Vec<Note>>()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    async fn create_note(
        &self,
        token: Option<&str>,
        title: &str,
        content: &str,
    ) -> Result<Note, ApiError> {
        let request = self
            .http
            .post(self.url(CREATE_NOTE))
            .json(&NoteDraft { title, content });
        let response = self.send(token, request, CREATE_NOTE).await?;
        Self::read_note(response).await
    }

    async fn update_note(
        &self,
        token: Option<&str>,
        id: &str,
        title: &str,
        content: &str,
    ) -> Result<Note, ApiError> {
        let request = self
            .http
            .post(self.url(UPDATE_NOTE))
            .json(&NoteEdit { id, title, content });
        let response = self.send(token, request, UPDATE_NOTE).await?;
        Self::read_note(response).await
    }

    async fn delete_note(&self, token: Option<&str>, id: &str) -> Result<(), ApiError> {
        // The backend expects the id in the body of the DELETE.
        let request = self.http.delete(self.url(DELETE_NOTE)).json(&NoteRef { id });
        self.send(token, request, DELETE_NOTE).await?;
        Ok(())
    }

    async fn get_or_create_summary(
        &self,
        token: Option<&str>,
        note_id: &str,
    ) -> Result<String, ApiError> {
        let body = SummaryRequest { note_id };

        let request = self.http.post(self.url(GET_SUMMARY)).json(&body);
        let existing = self.send(token, request, GET_SUMMARY).await?;
        if let Some(summary) = Self::read_summary(existing).await?.into_text() {
            return Ok(summary);
        }

        tracing::debug!("No summary for note {note_id} yet, requesting one");
        let request = self.http.post(self.url(CREATE_SUMMARY)).json(&body);
        let created = self.send(token, request, CREATE_SUMMARY).await?;
        Self::read_summary(created)
            .await?
            .into_text()
            .ok_or_else(|| ApiError::MalformedResponse("Failed to generate summary".to_string()))
    }
}
