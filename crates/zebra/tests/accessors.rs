//! Accessor tests against a mock Stripe API.

mod common;

use async_trait::async_trait;
use serde_json::json;
use wiremock::{
    matchers::{any, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use common::{client_for, Account, BASE_AUTH, HOST_AUTH};
use zebra::{
    StripeChargeMixin, StripeCustomerMixin, StripeFields, StripeInvoiceItemMixin,
    StripeInvoiceMixin, StripeMixin, StripePlanMixin, StripeSubscriptionMixin, ZebraError,
    ZebraMixin,
};
use zebra_stripe::{Customer, StripeClient, StripeError};

async fn mock_get(server: &MockServer, url_path: &str, auth: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .and(header("authorization", auth))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

fn assert_zebra(_: &impl ZebraMixin) {}

#[tokio::test]
async fn customer_is_retrieved_with_host_id_and_key() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/v1/customers/cus_123",
        HOST_AUTH,
        json!({ "id": "cus_123", "email": "a@b.com" }),
    )
    .await;

    let account = Account::complete(client_for(&server));
    assert_zebra(&account);

    let customer = account.stripe_customer().await.unwrap();
    assert_eq!(customer.id.as_str(), "cus_123");
    assert_eq!(customer.email.as_deref(), Some("a@b.com"));
}

#[tokio::test]
async fn base_key_is_used_when_host_has_none() {
    let server = MockServer::start().await;
    mock_get(&server, "/v1/customers/cus_123", BASE_AUTH, json!({ "id": "cus_123" })).await;

    let mut account = Account::complete(client_for(&server));
    account.api_key = None;

    account.stripe_customer().await.unwrap();
}

#[tokio::test]
async fn plan_is_retrieved_by_plan_id() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/v1/plans/gold",
        HOST_AUTH,
        json!({ "id": "gold", "amount": 999, "currency": "usd", "interval": "month" }),
    )
    .await;

    let plan = Account::complete(client_for(&server)).stripe_plan().await.unwrap();
    assert_eq!(plan.id.as_str(), "gold");
    assert_eq!(plan.interval, "month");
}

#[tokio::test]
async fn invoice_is_retrieved_by_invoice_id() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/v1/invoices/in_456",
        HOST_AUTH,
        json!({ "id": "in_456", "amount_due": 1500, "paid": false }),
    )
    .await;

    let invoice = Account::complete(client_for(&server))
        .stripe_invoice()
        .await
        .unwrap();
    assert_eq!(invoice.amount_due, 1500);
}

#[tokio::test]
async fn invoice_item_is_retrieved_by_invoice_item_id() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/v1/invoiceitems/ii_789",
        HOST_AUTH,
        json!({ "id": "ii_789", "amount": 200, "currency": "usd" }),
    )
    .await;

    let item = Account::complete(client_for(&server))
        .stripe_invoice_item()
        .await
        .unwrap();
    assert_eq!(item.id.as_str(), "ii_789");
}

#[tokio::test]
async fn charge_is_retrieved_by_charge_id() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/v1/charges/ch_012",
        HOST_AUTH,
        json!({ "id": "ch_012", "amount": 500, "currency": "usd", "paid": true }),
    )
    .await;

    let charge = Account::complete(client_for(&server))
        .stripe_charge()
        .await
        .unwrap();
    assert!(charge.paid);
}

#[tokio::test]
async fn missing_ids_fail_without_requests() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let account = Account::new(client_for(&server));

    let err = account.stripe_customer().await.unwrap_err();
    assert!(matches!(err, ZebraError::MissingField { field: "stripe_customer_id" }));

    let err = account.stripe_plan().await.unwrap_err();
    assert!(matches!(err, ZebraError::MissingField { field: "stripe_plan_id" }));

    let err = account.stripe_invoice().await.unwrap_err();
    assert!(matches!(err, ZebraError::MissingField { field: "stripe_invoice_id" }));

    let err = account.stripe_invoice_item().await.unwrap_err();
    assert!(matches!(
        err,
        ZebraError::MissingField { field: "stripe_invoice_item_id" }
    ));

    let err = account.stripe_charge().await.unwrap_err();
    assert!(matches!(err, ZebraError::MissingField { field: "stripe_charge_id" }));

    let err = account.stripe_subscription().await.unwrap_err();
    assert!(matches!(err, ZebraError::MissingField { field: "stripe_customer_id" }));
}

#[tokio::test]
async fn stripe_errors_pass_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/charges/ch_012"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "type": "invalid_request_error",
                "message": "Invalid API Key provided: sk_test_****host"
            }
        })))
        .mount(&server)
        .await;

    let err = Account::complete(client_for(&server))
        .stripe_charge()
        .await
        .unwrap_err();

    assert_eq!(err.as_stripe().and_then(StripeError::status), Some(401));
}

#[tokio::test]
async fn subscription_comes_from_customer() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/v1/customers/cus_123",
        HOST_AUTH,
        json!({
            "id": "cus_123",
            "subscription": {
                "id": "sub_1",
                "status": "past_due",
                "plan": { "id": "gold", "interval": "month" }
            }
        }),
    )
    .await;

    let subscription = Account::complete(client_for(&server))
        .stripe_subscription()
        .await
        .unwrap()
        .expect("customer has a subscription");

    assert_eq!(subscription.id.as_str(), "sub_1");
    assert!(!subscription.is_active());
}

#[tokio::test]
async fn subscription_is_none_when_customer_has_none() {
    let server = MockServer::start().await;
    mock_get(&server, "/v1/customers/cus_123", HOST_AUTH, json!({ "id": "cus_123" })).await;

    let subscription = Account::complete(client_for(&server))
        .stripe_subscription()
        .await
        .unwrap();

    assert!(subscription.is_none());
}

/// A host that answers `stripe_customer` from memory.
struct CachedCustomer {
    stripe: StripeClient,
    customer: serde_json::Value,
}

impl StripeFields for CachedCustomer {}

impl StripeMixin for CachedCustomer {
    fn stripe_client(&self) -> &StripeClient {
        &self.stripe
    }
}

#[async_trait]
impl StripeCustomerMixin for CachedCustomer {
    async fn stripe_customer(&self) -> zebra::Result<Customer> {
        Ok(serde_json::from_value(self.customer.clone()).unwrap())
    }
}

impl StripeSubscriptionMixin for CachedCustomer {}

#[tokio::test]
async fn subscription_uses_overridden_customer_accessor() {
    let host = CachedCustomer {
        stripe: StripeClient::new("sk_test_unused").unwrap(),
        customer: json!({
            "id": "cus_cached",
            "subscription": { "id": "sub_cached", "status": "active" }
        }),
    };

    let subscription = host.stripe_subscription().await.unwrap().unwrap();
    assert_eq!(subscription.id.as_str(), "sub_cached");
    assert!(subscription.is_active());
}
