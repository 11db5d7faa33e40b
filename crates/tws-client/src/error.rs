//! Error types for backend communication.

use thiserror::Error;

use tws_model::ModelError;

/// Errors that can occur while talking to the property backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Network request failed (connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status.
    #[error("backend error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, best effort.
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("response decode error: {0}")]
    Decode(String),

    /// Decoded shape failed model-level normalization.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ClientError {
    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Api { status: 502..=504, .. }
        )
    }

    /// A short message suitable for a transient notification.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Could not reach the server. Check your connection and retry.",
            Self::Api { status, .. } if *status == 401 || *status == 403 => {
                "The server rejected the credentials."
            }
            Self::Api { .. } => "The server rejected the request.",
            Self::Decode(_) | Self::Model(_) => "The server returned an unexpected response.",
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        assert!(ClientError::Network("timeout".to_string()).is_retryable());
        assert!(
            ClientError::Api {
                status: 503,
                message: String::new()
            }
            .is_retryable()
        );
        assert!(
            !ClientError::Api {
                status: 400,
                message: String::new()
            }
            .is_retryable()
        );
        assert!(!ClientError::Decode("bad json".to_string()).is_retryable());
    }
}
