//! Every accessor in one bundle.

use crate::accessors::{
    StripeChargeMixin, StripeCustomerMixin, StripeInvoiceItemMixin, StripeInvoiceMixin,
    StripePlanMixin, StripeSubscriptionMixin,
};
use crate::sync::StripeSyncMixin;

/// All Stripe accessors: `stripe`, `stripe_customer`, `stripe_subscription`,
/// `stripe_plan`, `stripe_invoice`, `stripe_invoice_item`, `stripe_charge`
/// and `stripe_sync`.
///
/// Implemented automatically for any type that has every capability; use
/// [`zebra_mixin!`](crate::zebra_mixin) to opt a type into all of them.
pub trait ZebraMixin:
    StripeCustomerMixin
    + StripeSubscriptionMixin
    + StripePlanMixin
    + StripeInvoiceMixin
    + StripeInvoiceItemMixin
    + StripeChargeMixin
    + StripeSyncMixin
{
}

impl<T> ZebraMixin for T where
    T: StripeCustomerMixin
        + StripeSubscriptionMixin
        + StripePlanMixin
        + StripeInvoiceMixin
        + StripeInvoiceItemMixin
        + StripeChargeMixin
        + StripeSyncMixin
{
}

/// Implement every capability mixin for one or more types, using the
/// default accessors.
///
/// The types must already implement [`StripeMixin`](crate::StripeMixin).
/// To override a single accessor, implement the mixins by hand instead.
#[macro_export]
macro_rules! zebra_mixin {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::StripeCustomerMixin for $ty {}
            impl $crate::StripeSubscriptionMixin for $ty {}
            impl $crate::StripePlanMixin for $ty {}
            impl $crate::StripeInvoiceMixin for $ty {}
            impl $crate::StripeInvoiceItemMixin for $ty {}
            impl $crate::StripeChargeMixin for $ty {}
            impl $crate::StripeSyncMixin for $ty {}
        )+
    };
}
