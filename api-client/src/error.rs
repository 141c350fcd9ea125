use std::fmt;

/// Errors produced while talking to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The backend could not be reached (connection refused, timeout).
    Connection(String),
    /// The backend answered with a non-success HTTP status.
    Status(u16),
    /// The response body could not be decoded.
    InvalidResponse(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Connection(detail) => {
                write!(f, "could not reach the backend: {}", detail)
            }
            ClientError::Status(code) => write!(f, "backend answered with status {}", code),
            ClientError::InvalidResponse(detail) => {
                write!(f, "could not decode the response: {}", detail)
            }
        }
    }
}

impl std::error::Error for ClientError {}
