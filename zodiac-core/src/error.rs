//! Error types shared by every console component.

use thiserror::Error;

/// Failure of a call against the admin API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// A 2xx body did not match the canonical schema for its endpoint.
    #[error("unexpected response shape from {endpoint}: {detail}")]
    UnexpectedShape { endpoint: String, detail: String },
    /// The client-side timeout elapsed before a response arrived.
    #[error("request to {endpoint} timed out")]
    Timeout { endpoint: String },
    /// A request body could not be serialized.
    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the backend answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn shape(endpoint: &str, detail: impl std::fmt::Display) -> Self {
        Self::UnexpectedShape {
            endpoint: endpoint.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Local form validation failure; never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, ValidationError};

    #[test]
    fn status_errors_display_backend_message() {
        let err = ApiError::Status {
            status: 404,
            message: "Quiz not found".into(),
        };
        assert_eq!(err.to_string(), "Quiz not found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(ApiError::Transport("offline".into()).status(), None);
    }

    #[test]
    fn validation_error_names_field() {
        let err = ValidationError::new("correct_answer", "must match an option");
        assert_eq!(err.to_string(), "correct_answer: must match an option");
    }
}
