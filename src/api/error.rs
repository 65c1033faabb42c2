//! Client Error Types

use thiserror::Error;

/// Message shown when the server fails without saying why
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// Errors from calling the backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response, with the body's `error` string when there was one
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_FAILURE))]
    Server { status: u16, message: Option<String> },

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    Decode(String),

    /// Rejected locally before sending
    #[error("{0}")]
    Validation(String),
}

impl ClientError {
    pub fn server(status: u16, message: Option<String>) -> Self {
        ClientError::Server { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the request failed before the backend answered
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Network(_) | ClientError::Decode(_))
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else if e.is_timeout() {
            ClientError::Network(format!("request timed out: {}", e))
        } else if e.is_connect() {
            ClientError::Network(format!("backend unavailable: {}", e))
        } else if let Some(status) = e.status() {
            ClientError::server(status.as_u16(), None)
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

/// Result type for backend calls
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_falls_back() {
        assert_eq!(ClientError::server(500, None).to_string(), "Something went wrong");
        assert_eq!(
            ClientError::server(401, Some("Invalid credentials".into())).to_string(),
            "Invalid credentials"
        );
        assert_eq!(ClientError::server(404, None).status(), Some(404));
    }

    #[test]
    fn test_transport_classification() {
        assert!(ClientError::Network("down".into()).is_transport());
        assert!(!ClientError::Validation("bad".into()).is_transport());
    }
}
