/*
[INPUT]:  Error sources (HTTP transport, API status codes, response decoding)
[OUTPUT]: Structured error types with status accessors
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the taskboard adapter
#[derive(Error, Debug)]
pub enum TaskboardError {
    /// HTTP request failed at the transport level (connection refused, timeout, DNS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Server returned a success status with a body that does not match the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TaskboardError {
    /// Check whether the error originated below the API (transport rather than server)
    pub fn is_transport(&self) -> bool {
        matches!(self, TaskboardError::Http(_))
    }

    /// HTTP status carried by an API error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            TaskboardError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        TaskboardError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, TaskboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = TaskboardError::api_error(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        match err {
            TaskboardError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_status_accessor() {
        let err = TaskboardError::api_error(StatusCode::NOT_FOUND, "missing");
        assert_eq!(err.status(), Some(404));

        let err = TaskboardError::MalformedResponse("bad json".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_transport());
    }
}
