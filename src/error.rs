use thiserror::Error;

pub const GENERIC_FAILURE: &str = "Something went wrong";
pub const CREATE_FAILED: &str = "Failed to create booking";
pub const LOAD_FAILED: &str = "Failed to load";
pub const UPDATE_FAILED: &str = "Failed to update";
pub const DELETE_FAILED: &str = "Failed to delete";

/// Errors from the booking backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Text shown to the user. A non-2xx response shows its body; the other
    /// variants show their underlying message. Blank text becomes `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        let text = match self {
            ApiError::Status { body, .. } => body,
            ApiError::Network(msg) | ApiError::Parse(msg) | ApiError::Serialize(msg) => msg,
        };
        let text = text.trim();
        if text.is_empty() {
            fallback.to_string()
        } else {
            text.to_string()
        }
    }
}
