//! The fields a host exposes to the Stripe accessors.

use zebra_core::{
    resolve, resolve_or, ApiKey, Attr, ChargeId, CustomerId, InvoiceId, InvoiceItemId, PlanId,
    SyncParams,
};

use crate::sync::SyncMethod;

/// Fields a host model provides to the Stripe accessors.
///
/// Every field is optional and absent by default. Implement only the ones
/// your model has; an accessor whose field is absent fails with
/// [`ZebraError::MissingField`](crate::ZebraError::MissingField).
pub trait StripeFields: Send + Sync {
    /// Key used to authenticate this host's requests.
    fn stripe_api_key(&self) -> Option<ApiKey> {
        None
    }

    /// Customer looked up by `stripe_customer`.
    fn stripe_customer_id(&self) -> Option<CustomerId> {
        None
    }

    /// Plan looked up by `stripe_plan`.
    fn stripe_plan_id(&self) -> Option<PlanId> {
        None
    }

    /// Invoice looked up by `stripe_invoice`.
    fn stripe_invoice_id(&self) -> Option<InvoiceId> {
        None
    }

    /// Invoice item looked up by `stripe_invoice_item`.
    fn stripe_invoice_item_id(&self) -> Option<InvoiceItemId> {
        None
    }

    /// Charge looked up by `stripe_charge`.
    fn stripe_charge_id(&self) -> Option<ChargeId> {
        None
    }

    /// Whether `stripe_sync` may run.
    fn stripe_sync_enabled(&self) -> bool {
        false
    }

    /// Parameters passed to the sync method.
    fn stripe_sync_kwargs(&self) -> SyncParams {
        SyncParams::new()
    }

    /// Operation `stripe_sync` performs.
    fn stripe_sync_method(&self) -> Option<SyncMethod> {
        None
    }
}

/// A field set assembled at runtime.
///
/// Each field is either a stored value or a closure evaluated on every read.
///
/// ```
/// use zebra::{HostFields, StripeFields};
/// use zebra_core::Attr;
///
/// let fields = HostFields::new()
///     .customer_id("cus_123".parse::<zebra_core::CustomerId>().unwrap())
///     .sync_enabled(Attr::computed(|| true));
///
/// assert_eq!(fields.stripe_customer_id().unwrap().as_str(), "cus_123");
/// assert!(fields.stripe_sync_enabled());
/// assert!(fields.stripe_plan_id().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HostFields {
    api_key: Option<Attr<ApiKey>>,
    customer_id: Option<Attr<CustomerId>>,
    plan_id: Option<Attr<PlanId>>,
    invoice_id: Option<Attr<InvoiceId>>,
    invoice_item_id: Option<Attr<InvoiceItemId>>,
    charge_id: Option<Attr<ChargeId>>,
    sync_enabled: Option<Attr<bool>>,
    sync_kwargs: Option<Attr<SyncParams>>,
    sync_method: Option<Attr<SyncMethod>>,
}

impl HostFields {
    /// An empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `stripe_api_key`.
    #[must_use]
    pub fn api_key(mut self, attr: impl Into<Attr<ApiKey>>) -> Self {
        self.api_key = Some(attr.into());
        self
    }

    /// Set `stripe_customer_id`.
    #[must_use]
    pub fn customer_id(mut self, attr: impl Into<Attr<CustomerId>>) -> Self {
        self.customer_id = Some(attr.into());
        self
    }

    /// Set `stripe_plan_id`.
    #[must_use]
    pub fn plan_id(mut self, attr: impl Into<Attr<PlanId>>) -> Self {
        self.plan_id = Some(attr.into());
        self
    }

    /// Set `stripe_invoice_id`.
    #[must_use]
    pub fn invoice_id(mut self, attr: impl Into<Attr<InvoiceId>>) -> Self {
        self.invoice_id = Some(attr.into());
        self
    }

    /// Set `stripe_invoice_item_id`.
    #[must_use]
    pub fn invoice_item_id(mut self, attr: impl Into<Attr<InvoiceItemId>>) -> Self {
        self.invoice_item_id = Some(attr.into());
        self
    }

    /// Set `stripe_charge_id`.
    #[must_use]
    pub fn charge_id(mut self, attr: impl Into<Attr<ChargeId>>) -> Self {
        self.charge_id = Some(attr.into());
        self
    }

    /// Set `stripe_sync_enabled`.
    #[must_use]
    pub fn sync_enabled(mut self, attr: impl Into<Attr<bool>>) -> Self {
        self.sync_enabled = Some(attr.into());
        self
    }

    /// Set `stripe_sync_kwargs`.
    #[must_use]
    pub fn sync_kwargs(mut self, attr: impl Into<Attr<SyncParams>>) -> Self {
        self.sync_kwargs = Some(attr.into());
        self
    }

    /// Set `stripe_sync_method`.
    #[must_use]
    pub fn sync_method(mut self, attr: impl Into<Attr<SyncMethod>>) -> Self {
        self.sync_method = Some(attr.into());
        self
    }
}

impl StripeFields for HostFields {
    fn stripe_api_key(&self) -> Option<ApiKey> {
        resolve(self.api_key.as_ref())
    }

    fn stripe_customer_id(&self) -> Option<CustomerId> {
        resolve(self.customer_id.as_ref())
    }

    fn stripe_plan_id(&self) -> Option<PlanId> {
        resolve(self.plan_id.as_ref())
    }

    fn stripe_invoice_id(&self) -> Option<InvoiceId> {
        resolve(self.invoice_id.as_ref())
    }

    fn stripe_invoice_item_id(&self) -> Option<InvoiceItemId> {
        resolve(self.invoice_item_id.as_ref())
    }

    fn stripe_charge_id(&self) -> Option<ChargeId> {
        resolve(self.charge_id.as_ref())
    }

    fn stripe_sync_enabled(&self) -> bool {
        resolve_or(self.sync_enabled.as_ref(), false)
    }

    fn stripe_sync_kwargs(&self) -> SyncParams {
        resolve_or(self.sync_kwargs.as_ref(), SyncParams::new())
    }

    fn stripe_sync_method(&self) -> Option<SyncMethod> {
        resolve(self.sync_method.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    struct Bare;

    impl StripeFields for Bare {}

    #[test]
    fn trait_defaults_are_absent() {
        let host = Bare;
        assert!(host.stripe_api_key().is_none());
        assert!(host.stripe_customer_id().is_none());
        assert!(host.stripe_charge_id().is_none());
        assert!(!host.stripe_sync_enabled());
        assert!(host.stripe_sync_kwargs().is_empty());
        assert!(host.stripe_sync_method().is_none());
    }

    #[test]
    fn computed_fields_are_read_fresh() {
        let counter = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&counter);
        let fields = HostFields::new().invoice_id(Attr::computed(move || {
            let n = seen.fetch_add(1, Ordering::SeqCst);
            format!("in_{n}").parse::<InvoiceId>().unwrap()
        }));

        assert_eq!(fields.stripe_invoice_id().unwrap().as_str(), "in_0");
        assert_eq!(fields.stripe_invoice_id().unwrap().as_str(), "in_1");
    }

    #[test]
    fn stored_sync_settings() {
        let mut kwargs = SyncParams::new();
        kwargs.insert("email".into(), "a@b.com".into());

        let fields = HostFields::new()
            .sync_enabled(true)
            .sync_kwargs(kwargs)
            .sync_method(SyncMethod::CustomerCreate);

        assert!(fields.stripe_sync_enabled());
        assert_eq!(fields.stripe_sync_kwargs().len(), 1);
        assert!(matches!(
            fields.stripe_sync_method(),
            Some(SyncMethod::CustomerCreate)
        ));
    }
}
