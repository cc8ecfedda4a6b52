use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("resource not found: {path}")]
    NotFound { path: String },

    /// Non-2xx response; the message is the backend's own when the body
    /// carried one, otherwise a generic fallback.
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("not authorized: {0}")]
    NotAuthorized(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
