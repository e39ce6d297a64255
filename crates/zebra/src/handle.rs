//! The authenticated Stripe handle.

use zebra_stripe::StripeClient;

use crate::fields::StripeFields;

/// Provides `stripe()`, the client every other accessor goes through.
///
/// The host hands over a base client; when the host also has its own
/// `stripe_api_key`, the handle is re-keyed with it on every call. Keys
/// live on the handle, so hosts with different keys never see each other's.
pub trait StripeMixin: StripeFields {
    /// The base client this host uses.
    fn stripe_client(&self) -> &StripeClient;

    /// A client authenticated for this host.
    fn stripe(&self) -> StripeClient {
        match self.stripe_api_key() {
            Some(key) => self.stripe_client().with_api_key(key),
            None => self.stripe_client().clone(),
        }
    }
}
