//! # Domain models for notes and sessions
//!
//! Defines the data structures exchanged with the notes backend and kept in the
//! browser's persistent store. Everything here is `Serialize + Deserialize` so the
//! same types flow through the REST client and the session records.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Note`] | A server-owned note: opaque `id`, user-supplied `title` and `content`, creation/update timestamps and the owning `user_id`. |
//! | [`UserProfile`] | The display identity saved at sign-in (`{name?, email?}`), used only for the navbar greeting. |
//! | [`Session`] | The bearer `token` plus the [`UserProfile`], as read from the session store. |
//!
//! ## Timestamps
//!
//! The backend is not strict about timestamp formats, so [`parse_timestamp`] accepts
//! RFC 3339 date-times, date-times with a short or colon-less offset (`+00`, `+0000`),
//! naive date-times and bare `YYYY-MM-DD` dates (taken as midnight UTC). [`Note::timestamp_label`] renders the date shown on a note card, e.g.
//! `"Tue Jan 02 2024 (updated)"`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A note as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Backend-assigned identifier. Numeric ids are read as their decimal string.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub user_id: String,
}

impl Note {
    /// Whether the note has been edited since it was created.
    pub fn was_updated(&self) -> bool {
        self.updated_at > self.created_at
    }

    /// The timestamp a note card displays: `updated_at` once edited, else `created_at`.
    pub fn display_timestamp(&self) -> DateTime<Utc> {
        if self.was_updated() {
            self.updated_at
        } else {
            self.created_at
        }
    }

    /// Human-readable date line, suffixed with `" (updated)"` for edited notes.
    pub fn timestamp_label(&self) -> String {
        let date = self.display_timestamp().format("%a %b %d %Y").to_string();
        if self.was_updated() {
            format!("{date} (updated)")
        } else {
            date
        }
    }
}

/// Display identity stored alongside the token.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserProfile {
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Self {
            name: non_empty(name),
            email: non_empty(email),
        }
    }

    /// Name, falling back to email, then to `"User"`.
    pub fn display_name(&self) -> &str {
        self.known_identity().unwrap_or("User")
    }

    /// First character of the name or email, `"U"` when neither is known.
    pub fn initial(&self) -> String {
        self.known_identity()
            .and_then(|s| s.chars().next())
            .map(String::from)
            .unwrap_or_else(|| "U".to_string())
    }

    // Stored records bypass `new`, so blanks are skipped here as well.
    fn known_identity(&self) -> Option<&str> {
        non_blank(&self.name).or_else(|| non_blank(&self.email))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// The locally persisted authentication state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: UserProfile,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Parse a backend timestamp in any of the accepted formats.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // Offsets written as `+00`, `+0000` or `+00:00`
    for format in ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%d %H:%M:%S%.f%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
