//! Identifier types for zebra.
//!
//! Stripe object IDs end up interpolated into request paths, so every ID is
//! validated once at the edge and carried as a distinct type afterwards. A
//! plan ID can't be handed to the charge endpoint by accident.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IdError;

/// Characters that would change the meaning of a request path.
const FORBIDDEN: &[char] = &['/', '\\', '?', '#', '%'];

fn validate(s: &str) -> Result<(), IdError> {
    if s.is_empty() {
        return Err(IdError::Empty);
    }
    if s.chars().any(|c| c.is_whitespace() || c.is_control() || FORBIDDEN.contains(&c)) {
        return Err(IdError::InvalidCharacter { id: s.to_string() });
    }
    // URL parsing resolves `.` and `..` segments
    if s == "." || s.contains("..") {
        return Err(IdError::DotSegment { id: s.to_string() });
    }
    Ok(())
}

macro_rules! stripe_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Return the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                validate(s)?;
                Ok(Self(s.to_string()))
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                validate(&value)?;
                Ok(Self(value))
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IdError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

stripe_id!(
    /// A Stripe customer ID (`cus_...`).
    CustomerId
);
stripe_id!(
    /// A Stripe plan ID. Plans may carry caller-chosen IDs, so no prefix is enforced.
    PlanId
);
stripe_id!(
    /// A Stripe invoice ID (`in_...`).
    InvoiceId
);
stripe_id!(
    /// A Stripe invoice item ID (`ii_...`).
    InvoiceItemId
);
stripe_id!(
    /// A Stripe charge ID (`ch_...`).
    ChargeId
);
stripe_id!(
    /// A Stripe subscription ID (`sub_...`).
    SubscriptionId
);

/// A Stripe secret API key.
///
/// The key is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a secret key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Expose the secret for use in an authorization header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether this is a test-mode key (`sk_test_` or `rk_test_`).
    #[must_use]
    pub fn is_test_mode(&self) -> bool {
        self.0.starts_with("sk_test_") || self.0.starts_with("rk_test_")
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
