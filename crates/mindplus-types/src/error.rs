use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MindError {
    #[error("Invalid timer duration: {0}s")]
    InvalidDuration(i64),

    #[error("Failed to start chat session: {0}")]
    SessionStart(String),

    #[error("Failed to send message: {0}")]
    SendFailure(String),

    #[error("A message is already being sent")]
    SendInFlight,

    #[error("Message is empty")]
    EmptyMessage,

    #[error("Chat session is not ready")]
    SessionNotReady,

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for MindError {
    fn from(e: serde_json::Error) -> Self {
        MindError::Serialization(e.to_string())
    }
}
