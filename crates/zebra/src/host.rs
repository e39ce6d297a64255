//! A ready-made host for field sets built at runtime.

use zebra_core::{ApiKey, ChargeId, CustomerId, InvoiceId, InvoiceItemId, PlanId, SyncParams};
use zebra_stripe::StripeClient;

use crate::fields::{HostFields, StripeFields};
use crate::handle::StripeMixin;
use crate::sync::SyncMethod;

/// A client paired with a [`HostFields`], carrying every accessor.
///
/// Useful when the fields come from configuration or a database row rather
/// than from a model type of your own.
#[derive(Debug, Clone)]
pub struct FieldHost {
    client: StripeClient,
    fields: HostFields,
}

impl FieldHost {
    /// Pair a client with a field set.
    #[must_use]
    pub fn new(client: StripeClient, fields: HostFields) -> Self {
        Self { client, fields }
    }

    /// The field set.
    #[must_use]
    pub fn fields(&self) -> &HostFields {
        &self.fields
    }
}

impl StripeFields for FieldHost {
    fn stripe_api_key(&self) -> Option<ApiKey> {
        self.fields.stripe_api_key()
    }

    fn stripe_customer_id(&self) -> Option<CustomerId> {
        self.fields.stripe_customer_id()
    }

    fn stripe_plan_id(&self) -> Option<PlanId> {
        self.fields.stripe_plan_id()
    }

    fn stripe_invoice_id(&self) -> Option<InvoiceId> {
        self.fields.stripe_invoice_id()
    }

    fn stripe_invoice_item_id(&self) -> Option<InvoiceItemId> {
        self.fields.stripe_invoice_item_id()
    }

    fn stripe_charge_id(&self) -> Option<ChargeId> {
        self.fields.stripe_charge_id()
    }

    fn stripe_sync_enabled(&self) -> bool {
        self.fields.stripe_sync_enabled()
    }

    fn stripe_sync_kwargs(&self) -> SyncParams {
        self.fields.stripe_sync_kwargs()
    }

    fn stripe_sync_method(&self) -> Option<SyncMethod> {
        self.fields.stripe_sync_method()
    }
}

impl StripeMixin for FieldHost {
    fn stripe_client(&self) -> &StripeClient {
        &self.client
    }
}

crate::zebra_mixin!(FieldHost);
