use thiserror::Error;

pub const FALLBACK_VALIDATION: &str = "The submitted data is invalid.";
pub const FALLBACK_UNAUTHORIZED: &str = "Your session has expired. Please sign in again.";
pub const FALLBACK_FORBIDDEN: &str = "You do not have permission to perform this action.";
pub const FALLBACK_NOT_FOUND: &str = "The requested resource does not exist.";
pub const FALLBACK_SERVER: &str = "Something went wrong. Please try again later.";
pub const FALLBACK_NETWORK: &str = "Unable to reach the server. Please check your connection and try again.";
pub const FALLBACK_PAYLOAD: &str = "The server returned an unexpected response.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Maps a non-2xx status to the error taxonomy, keeping the backend
    /// message when one was sent.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let pick = |fallback: &str| message.clone().unwrap_or_else(|| fallback.to_string());
        match status {
            400 | 409 | 422 => ApiError::Validation(pick(FALLBACK_VALIDATION)),
            401 => ApiError::Unauthorized(pick(FALLBACK_UNAUTHORIZED)),
            403 => ApiError::Forbidden(pick(FALLBACK_FORBIDDEN)),
            404 => ApiError::NotFound(pick(FALLBACK_NOT_FOUND)),
            _ => ApiError::Server {
                status,
                message: pick(FALLBACK_SERVER),
            },
        }
    }

    /// The single human-readable string shown in banners and panels.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(msg)
            | ApiError::NotFound(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::Config(msg) => msg.clone(),
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Network(_) => FALLBACK_NETWORK.to_string(),
            ApiError::Payload(_) => FALLBACK_PAYLOAD.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}
