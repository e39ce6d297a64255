//! Core types for zebra.
//!
//! This crate provides the foundations shared by the Stripe client and the
//! host mixins:
//!
//! - **Attributes**: `Attr`, `resolve`, `resolve_or`
//! - **Identifiers**: `CustomerId`, `PlanId`, `InvoiceId`, `InvoiceItemId`,
//!   `ChargeId`, `SubscriptionId`
//! - **Secrets**: `ApiKey`
//! - **Sync parameters**: `SyncParams`

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attr;
pub mod error;
pub mod ids;

pub use attr::{resolve, resolve_or, Attr};
pub use error::IdError;
pub use ids::{ApiKey, ChargeId, CustomerId, InvoiceId, InvoiceItemId, PlanId, SubscriptionId};

/// Keyword arguments forwarded verbatim to a Stripe create/update call.
///
/// Keys are Stripe parameter names; nested objects and arrays are encoded
/// with the bracket convention by the client.
pub type SyncParams = std::collections::BTreeMap<String, serde_json::Value>;
