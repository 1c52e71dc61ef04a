//! Errors raised by the local persistence layer.

/// Failures while reading configuration or encoding session records.
///
/// Session *reads* never produce one of these: a malformed record degrades to an
/// anonymous session instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid client config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("could not encode client config: {0}")]
    ConfigEncode(#[from] toml::ser::Error),

    #[error("could not access client config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode session record: {0}")]
    Serialize(#[from] serde_json::Error),
}
