//! Transport error taxonomy and the status classifier.
//!
//! The backend's status code and message string are the only carriers of
//! error semantics; classification is purely by status.

use serde::Deserialize;
use thiserror::Error;

/// Error returned by every endpoint call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 401 — the session is over; stored credentials were cleared.
    #[error("unauthorized")]
    Unauthorized,

    /// 403.
    #[error("forbidden")]
    Forbidden,

    /// 404.
    #[error("not found")]
    NotFound,

    /// 400/422 — the backend's validation message, verbatim.
    #[error("{0}")]
    Validation(String),

    /// Any 5xx.
    #[error("server error ({0})")]
    Server(u16),

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// 2xx with a body the client could not decode.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Any other non-success status.
    #[error("request failed ({status}): {message}")]
    Other { status: u16, message: String },
}

/// Backend error body: `{"error": <code>, "message": <text | [text]>}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<MessageField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MessageField {
    One(String),
    Many(Vec<String>),
}

impl MessageField {
    fn join(self) -> String {
        match self {
            MessageField::One(message) => message,
            MessageField::Many(messages) => messages.join("; "),
        }
    }
}

fn backend_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .map(MessageField::join)
}

/// Map a non-success status and its body to an `ApiError`.
pub fn classify(status: u16, body: &str) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        404 => ApiError::NotFound,
        400 | 422 => ApiError::Validation(
            backend_message(body).unwrap_or_else(|| "validation failed".to_string()),
        ),
        500.. => ApiError::Server(status),
        _ => ApiError::Other {
            status,
            message: backend_message(body).unwrap_or_else(|| "request failed".to_string()),
        },
    }
}

impl ApiError {
    /// The notification text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            ApiError::Forbidden => "You don't have permission to do that.".to_string(),
            ApiError::NotFound => "The requested resource was not found.".to_string(),
            ApiError::Validation(message) => message.clone(),
            ApiError::Server(_) | ApiError::Decode(_) => {
                "Something went wrong on our side. Please try again.".to_string()
            }
            ApiError::Network(_) => "Can't reach the server. Check your connection.".to_string(),
            ApiError::Other { message, .. } => message.clone(),
        }
    }
}
