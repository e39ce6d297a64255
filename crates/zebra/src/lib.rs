//! Stripe accessors for application models.
//!
//! Implement [`StripeFields`] on a model to say which Stripe objects it
//! points at, then opt into the accessors you want. Every accessor is a
//! default trait method, so any of them can be overridden per type.
//!
//! # Example
//!
//! ```no_run
//! use zebra::{zebra_mixin, StripeCustomerMixin, StripeFields, StripeMixin};
//! use zebra_core::{ApiKey, CustomerId};
//! use zebra_stripe::StripeClient;
//!
//! struct Account {
//!     stripe: StripeClient,
//!     customer_id: Option<CustomerId>,
//!     api_key: String,
//! }
//!
//! impl StripeFields for Account {
//!     fn stripe_api_key(&self) -> Option<ApiKey> {
//!         Some(ApiKey::new(self.api_key.clone()))
//!     }
//!
//!     fn stripe_customer_id(&self) -> Option<CustomerId> {
//!         self.customer_id.clone()
//!     }
//! }
//!
//! impl StripeMixin for Account {
//!     fn stripe_client(&self) -> &StripeClient {
//!         &self.stripe
//!     }
//! }
//!
//! zebra_mixin!(Account);
//!
//! # async fn example(account: Account) -> zebra::Result<()> {
//! let customer = account.stripe_customer().await?;
//! println!("{:?}", customer.email);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod accessors;
pub mod aggregate;
mod error;
pub mod fields;
pub mod handle;
pub mod host;
pub mod sync;

pub use accessors::{
    StripeChargeMixin, StripeCustomerMixin, StripeInvoiceItemMixin, StripeInvoiceMixin,
    StripePlanMixin, StripeSubscriptionMixin,
};
pub use aggregate::ZebraMixin;
pub use error::{Result, ZebraError};
pub use fields::{HostFields, StripeFields};
pub use handle::StripeMixin;
pub use host::FieldHost;
pub use sync::{StripeSyncMixin, SyncCallback, SyncMethod, SyncOutcome};
