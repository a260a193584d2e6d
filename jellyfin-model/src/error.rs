use thiserror::Error;

/// Errors produced while encoding or decoding Jellyfin models.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("value of type {kind} cannot be placed in a query string at '{key}'")]
    UnsupportedQueryValue { key: String, kind: &'static str },

    #[error("unknown {kind} value '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("invalid websocket message: {0}")]
    InvalidMessage(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
