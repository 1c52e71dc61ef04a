//! Shared session store constructor for all platforms.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorageStore`]
//! - **Desktop / Mobile** (native): one file per record via [`store::FileStore`]
//! - **WASM without `web`**: in-memory, lost on reload
//!
//! [`load_client_config`] finds `aibrain.toml` the same way: next to the user's
//! other config files on native builds, compiled in from this crate on WASM.

use store::{ClientConfig, SessionStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Create the session store for this platform, using the record keys from `config`.
pub fn make_session_store(config: &ClientConfig) -> SessionStore<PlatformStore> {
    SessionStore::with_keys(platform_backend(), config.session.clone())
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn platform_backend() -> PlatformStore {
    store::LocalStorageStore::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_backend() -> PlatformStore {
    let base = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("aibrain");
    let backend = store::FileStore::new(base);
    tracing::debug!("Session records stored under {}", backend.base().display());
    backend
}

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
fn platform_backend() -> PlatformStore {
    store::MemoryStore::new()
}

/// The client config for this platform, with the build-time URL override applied.
/// A config that cannot be read or parsed is logged and replaced by the defaults.
pub fn load_client_config() -> ClientConfig {
    read_client_config()
        .unwrap_or_else(|err| {
            tracing::warn!("Using default client config: {err}");
            ClientConfig::default()
        })
        .with_env_override()
}

#[cfg(not(target_arch = "wasm32"))]
fn read_client_config() -> Result<ClientConfig, store::StoreError> {
    let path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("aibrain")
        .join(ClientConfig::filename());
    ClientConfig::load_or_create(&path)
}

#[cfg(target_arch = "wasm32")]
fn read_client_config() -> Result<ClientConfig, store::StoreError> {
    ClientConfig::from_toml(include_str!("../aibrain.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses_to_defaults() {
        let config = ClientConfig::from_toml(include_str!("../aibrain.toml")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
