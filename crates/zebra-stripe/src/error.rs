//! Stripe client error types.

use zebra_core::IdError;

/// Error type for Stripe operations.
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stripe API returned an error.
    #[error("Stripe API error ({status}): {error_type} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error type (e.g. `invalid_request_error`).
        error_type: String,
        /// Error message.
        message: String,
        /// Error code.
        code: Option<String>,
        /// Parameter that caused the error.
        param: Option<String>,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid identifier.
    #[error("Invalid identifier: {0}")]
    InvalidId(#[from] IdError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StripeError {
    /// HTTP status of an API error, if this is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether Stripe reported the requested object as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
