//! # Client configuration: `aibrain.toml`
//!
//! Defines the TOML configuration for the notes client: where the backend lives and
//! which storage keys hold the session.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://ai-note-app-3.onrender.com"
//!
//! [session]
//! token_key = "token"
//! user_key = "user"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. TOML (de)serialisation, builder helpers, [`ClientConfig::load_or_create`] for the config file, and [`ClientConfig::with_env_override`] for build-time overrides. |
//! | [`ApiConfig`] | Backend section: the `base_url` every endpoint path is appended to. |
//! | [`SessionKeys`] | Storage keys for the token and the user profile. |
//!
//! All structs implement `Default`, so a missing or empty file equals the production
//! configuration.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Backend URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://ai-note-app-3.onrender.com";

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionKeys,
}

/// Backend configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Storage keys of the session records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionKeys {
    #[serde(default = "default_token_key")]
    pub token_key: String,
    #[serde(default = "default_user_key")]
    pub user_key: String,
}

fn default_token_key() -> String {
    "token".to_string()
}

fn default_user_key() -> String {
    "user".to_string()
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            user_key: default_user_key(),
        }
    }
}

impl ClientConfig {
    /// Take `api.base_url` from the `AIBRAIN_API_URL` variable at build time when it
    /// was set. Browser builds have no runtime environment to read from.
    pub fn with_env_override(self) -> Self {
        match option_env!("AIBRAIN_API_URL") {
            Some(url) if !url.trim().is_empty() => self.with_base_url(url),
            _ => self,
        }
    }

    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The backend URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim().trim_end_matches('/')
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "aibrain.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, StoreError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read the config at `path`. A missing file is created with the defaults so
    /// there is something to edit next time.
    pub fn load_or_create(path: &Path) -> Result<Self, StoreError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let config = Self::default();
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, config.to_toml()?)?;
                tracing::info!("Wrote default client config to {}", path.display());
                Ok(config)
            }
            Err(err) => Err(err.into()),
        }
    }
}
