//! Error types for paydesk-client

use thiserror::Error;

/// Errors from talking to the remote transaction service
///
/// Two categories matter to callers: transport failures (connection refused,
/// timeout, bad TLS) and non-2xx responses. Malformed response shapes are
/// not an error; list normalization absorbs them.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
}

impl ClientError {
    /// The message to show inline near the triggering action: the
    /// server-provided one when there is one, otherwise the caller's
    /// generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Server { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Result type with ClientError
pub type ClientResult<T> = Result<T, ClientError>;
