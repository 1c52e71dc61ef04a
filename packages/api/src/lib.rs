//! # API crate: REST client for the AIBrain notes backend
//!
//! Every network call the frontend makes goes through this crate. It wraps the
//! backend's note and AI endpoints in typed async methods and maps HTTP failures
//! onto a small error taxonomy.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`NotesClient`], the `reqwest` implementation of [`NotesApi`], plus the endpoint paths |
//! | [`error`] | [`ApiError`]: `Unauthenticated`, `RequestFailed { status }`, transport and decoding failures |
//!
//! ## Authentication
//!
//! Every operation takes the bearer token read from the session store. A missing or
//! blank token fails with [`ApiError::Unauthenticated`] before any request is built.
//! A `401` comes back as `RequestFailed { status: 401 }`; callers check
//! [`ApiError::is_unauthorized`] and clear the session themselves.

use std::future::Future;

pub mod client;
pub mod error;

pub use client::NotesClient;
pub use error::ApiError;

pub use store::{Note, Session, UserProfile};

/// The operations the UI performs against the notes backend.
///
/// Implemented by [`NotesClient`] over HTTP; tests substitute in-memory fakes.
pub trait NotesApi {
    /// All notes of the signed-in user, in backend order.
    fn list_notes(
        &self,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Note>, ApiError>>;

    fn create_note(
        &self,
        token: Option<&str>,
        title: &str,
        content: &str,
    ) -> impl Future<Output = Result<Note, ApiError>>;

    fn update_note(
        &self,
        token: Option<&str>,
        id: &str,
        title: &str,
        content: &str,
    ) -> impl Future<Output = Result<Note, ApiError>>;

    fn delete_note(
        &self,
        token: Option<&str>,
        id: &str,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// Fetch the stored summary of a note, asking the backend to generate one when
    /// none exists yet.
    fn get_or_create_summary(
        &self,
        token: Option<&str>,
        note_id: &str,
    ) -> impl Future<Output = Result<String, ApiError>>;
}
