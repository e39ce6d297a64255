//! Error types for zebra.

use zebra_core::IdError;
use zebra_stripe::StripeError;

/// Result type for zebra operations.
pub type Result<T> = std::result::Result<T, ZebraError>;

/// Errors that can occur in zebra accessors.
#[derive(Debug, thiserror::Error)]
pub enum ZebraError {
    /// The Stripe call failed. Passed through unchanged.
    #[error(transparent)]
    Stripe(#[from] StripeError),

    /// The host does not provide a field the accessor needs.
    #[error("host does not provide {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A sync method name didn't match any supported operation.
    #[error("unknown sync method: {0:?}")]
    UnknownSyncMethod(String),

    /// Invalid identifier.
    #[error("invalid identifier: {0}")]
    InvalidId(#[from] IdError),
}

impl ZebraError {
    /// The underlying Stripe error, if this is one.
    #[must_use]
    pub fn as_stripe(&self) -> Option<&StripeError> {
        match self {
            Self::Stripe(e) => Some(e),
            _ => None,
        }
    }
}

/// Require a field the host may not provide.
pub(crate) fn require<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(ZebraError::MissingField { field })
}
