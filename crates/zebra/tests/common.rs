//! Common test utilities for zebra integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use wiremock::MockServer;

use zebra::{StripeFields, StripeMixin};
use zebra_core::{ApiKey, ChargeId, CustomerId, InvoiceId, InvoiceItemId, PlanId};
use zebra_stripe::{StripeClient, StripeConfig};

/// Key configured on the base client.
pub const BASE_KEY: &str = "sk_test_base";

/// Key supplied by the host.
pub const HOST_KEY: &str = "sk_test_host";

/// `Authorization` header for [`BASE_KEY`]: base64("sk_test_base:").
pub const BASE_AUTH: &str = "Basic c2tfdGVzdF9iYXNlOg==";

/// `Authorization` header for [`HOST_KEY`]: base64("sk_test_host:").
pub const HOST_AUTH: &str = "Basic c2tfdGVzdF9ob3N0Og==";

/// A client pointed at the mock server, authenticated with [`BASE_KEY`].
pub fn client_for(server: &MockServer) -> StripeClient {
    let config = StripeConfig {
        api_key: Some(BASE_KEY.into()),
        api_base: server.uri(),
        ..StripeConfig::default()
    };
    StripeClient::from_config(&config).expect("Failed to create Stripe client")
}

/// A host model with plain stored fields.
pub struct Account {
    pub stripe: StripeClient,
    pub api_key: Option<ApiKey>,
    pub customer_id: Option<CustomerId>,
    pub plan_id: Option<PlanId>,
    pub invoice_id: Option<InvoiceId>,
    pub invoice_item_id: Option<InvoiceItemId>,
    pub charge_id: Option<ChargeId>,
}

impl Account {
    /// An account with no fields set.
    pub fn new(stripe: StripeClient) -> Self {
        Self {
            stripe,
            api_key: None,
            customer_id: None,
            plan_id: None,
            invoice_id: None,
            invoice_item_id: None,
            charge_id: None,
        }
    }

    /// An account with every ID set and its own API key.
    pub fn complete(stripe: StripeClient) -> Self {
        Self {
            stripe,
            api_key: Some(ApiKey::new(HOST_KEY)),
            customer_id: Some("cus_123".parse().unwrap()),
            plan_id: Some("gold".parse().unwrap()),
            invoice_id: Some("in_456".parse().unwrap()),
            invoice_item_id: Some("ii_789".parse().unwrap()),
            charge_id: Some("ch_012".parse().unwrap()),
        }
    }
}

impl StripeFields for Account {
    fn stripe_api_key(&self) -> Option<ApiKey> {
        self.api_key.clone()
    }

    fn stripe_customer_id(&self) -> Option<CustomerId> {
        self.customer_id.clone()
    }

    fn stripe_plan_id(&self) -> Option<PlanId> {
        self.plan_id.clone()
    }

    fn stripe_invoice_id(&self) -> Option<InvoiceId> {
        self.invoice_id.clone()
    }

    fn stripe_invoice_item_id(&self) -> Option<InvoiceItemId> {
        self.invoice_item_id.clone()
    }

    fn stripe_charge_id(&self) -> Option<ChargeId> {
        self.charge_id.clone()
    }
}

impl StripeMixin for Account {
    fn stripe_client(&self) -> &StripeClient {
        &self.stripe
    }
}

zebra::zebra_mixin!(Account);
