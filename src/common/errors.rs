use thiserror::Error;

/// A request to the backend that never produced a usable reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::MalformedBody(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage is not available in this environment")]
    Unavailable,

    #[error("Failed to write {key:?}: {reason}")]
    Write { key: String, reason: String },

    #[error("Failed to read {key:?}: {reason}")]
    Read { key: String, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid API base URL {0:?}: expected an http(s) address")]
    InvalidBaseUrl(String),

    #[error("Invalid bind address {0:?}")]
    InvalidBindAddr(String),
}
