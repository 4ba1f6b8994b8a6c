//! Typed failures for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every variant renders as a short human-readable string. UI handlers turn
//! these into panel status text; nothing is retried and nothing escapes the
//! triggering handler.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Credentials were rejected.
    #[error("{0}")]
    Auth(String),

    /// The request never produced a response (DNS, CORS, offline, ...).
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    #[error("unexpected response: {0}")]
    Parse(String),

    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
