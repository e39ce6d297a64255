//! Stripe API client implementation.

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;

use zebra_core::{
    ApiKey, ChargeId, CustomerId, InvoiceId, InvoiceItemId, PlanId, SubscriptionId, SyncParams,
};

use crate::config::StripeConfig;
use crate::error::StripeError;
use crate::form;
use crate::types::{
    Charge, Customer, Invoice, InvoiceItem, Plan, StripeErrorResponse, Subscription,
};

/// Stripe API client.
///
/// Cloning is cheap; clones share the connection pool. The API key belongs
/// to the handle, so two handles with different keys never interfere.
#[derive(Debug, Clone)]
pub struct StripeClient {
    client: Client,
    base_url: String,
    api_key: Option<ApiKey>,
    api_version: Option<String>,
}

impl StripeClient {
    /// Create a new Stripe client against the live API.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Stripe secret API key (`sk_test_...` or `sk_live_...`)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, StripeError> {
        Self::from_config(&StripeConfig::with_api_key(api_key))
    }

    /// Create a Stripe client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &StripeConfig) -> Result<Self, StripeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: format!("{}/v1", config.api_base.trim_end_matches('/')),
            api_key: config.api_key.clone().map(ApiKey::from),
            api_version: config.api_version.clone(),
        })
    }

    /// Return a handle that authenticates with `api_key` instead of this one's key.
    #[must_use]
    pub fn with_api_key(&self, api_key: ApiKey) -> Self {
        Self {
            api_key: Some(api_key),
            ..self.clone()
        }
    }

    /// The key this handle authenticates with.
    #[must_use]
    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Base URL including the `/v1` prefix.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Retrieve a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it.
    pub async fn retrieve_customer(&self, id: &CustomerId) -> Result<Customer, StripeError> {
        self.get(&format!("customers/{id}")).await
    }

    /// Retrieve a subscription by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it.
    pub async fn retrieve_subscription(
        &self,
        id: &SubscriptionId,
    ) -> Result<Subscription, StripeError> {
        self.get(&format!("subscriptions/{id}")).await
    }

    /// Retrieve a plan by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it.
    pub async fn retrieve_plan(&self, id: &PlanId) -> Result<Plan, StripeError> {
        self.get(&format!("plans/{id}")).await
    }

    /// Retrieve an invoice by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it.
    pub async fn retrieve_invoice(&self, id: &InvoiceId) -> Result<Invoice, StripeError> {
        self.get(&format!("invoices/{id}")).await
    }

    /// Retrieve an invoice item by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it.
    pub async fn retrieve_invoice_item(
        &self,
        id: &InvoiceItemId,
    ) -> Result<InvoiceItem, StripeError> {
        self.get(&format!("invoiceitems/{id}")).await
    }

    /// Retrieve a charge by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it.
    pub async fn retrieve_charge(&self, id: &ChargeId) -> Result<Charge, StripeError> {
        self.get(&format!("charges/{id}")).await
    }

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it.
    pub async fn create_customer(&self, params: &SyncParams) -> Result<Customer, StripeError> {
        self.post("customers", params).await
    }

    /// Update a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it.
    pub async fn update_customer(
        &self,
        id: &CustomerId,
        params: &SyncParams,
    ) -> Result<Customer, StripeError> {
        self.post(&format!("customers/{id}"), params).await
    }

    /// Create a charge.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it.
    pub async fn create_charge(&self, params: &SyncParams) -> Result<Charge, StripeError> {
        self.post("charges", params).await
    }

    /// Create a plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it.
    pub async fn create_plan(&self, params: &SyncParams) -> Result<Plan, StripeError> {
        self.post("plans", params).await
    }

    /// Create an invoice.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it.
    pub async fn create_invoice(&self, params: &SyncParams) -> Result<Invoice, StripeError> {
        self.post("invoices", params).await
    }

    /// Create an invoice item.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it.
    pub async fn create_invoice_item(
        &self,
        params: &SyncParams,
    ) -> Result<InvoiceItem, StripeError> {
        self.post("invoiceitems", params).await
    }

    /// Create a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it.
    pub async fn create_subscription(
        &self,
        params: &SyncParams,
    ) -> Result<Subscription, StripeError> {
        self.post("subscriptions", params).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, StripeError> {
        let request = self.request(Method::GET, path)?;
        let response = request.send().await?;
        self.handle_response(response).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &SyncParams,
    ) -> Result<T, StripeError> {
        let request = self.request(Method::POST, path)?;
        let response = request.form(&form::encode(params)).send().await?;
        self.handle_response(response).await
    }

    fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder, StripeError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| StripeError::Configuration("No Stripe API key configured".into()))?;

        tracing::debug!(method = %method, path = %path, "Sending Stripe request");

        let mut request = self
            .client
            .request(method, format!("{}/{path}", self.base_url))
            .basic_auth(api_key.expose(), Option::<&str>::None);

        if let Some(version) = &self.api_version {
            request = request.header("Stripe-Version", version);
        }

        Ok(request)
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, StripeError> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            return Ok(serde_json::from_slice(&body)?);
        }

        // Try to parse error response
        let error_body: Result<StripeErrorResponse, _> = response.json().await;

        let error = match error_body {
            Ok(stripe_error) => StripeError::Api {
                status: status.as_u16(),
                error_type: stripe_error.error.error_type,
                message: stripe_error.error.message,
                code: stripe_error.error.code,
                param: stripe_error.error.param,
            },
            Err(_) => StripeError::Api {
                status: status.as_u16(),
                error_type: "unknown".to_string(),
                message: format!("HTTP {status}"),
                code: None,
                param: None,
            },
        };

        tracing::warn!(status = %status, error = %error, "Stripe request failed");
        Err(error)
    }
}
