//! Pushing host data to Stripe.
//!
//! A host opts in with three fields: `stripe_sync_enabled`,
//! `stripe_sync_kwargs` and `stripe_sync_method`. Sync only runs when all
//! three are set; otherwise it does nothing and reports
//! [`SyncOutcome::Skipped`].

use async_trait::async_trait;
use futures::future::BoxFuture;
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;

use zebra_core::{CustomerId, SyncParams};
use zebra_stripe::StripeClient;

use crate::error::{Result, ZebraError};
use crate::handle::StripeMixin;

type CallbackFn = dyn Fn(StripeClient, SyncParams) -> BoxFuture<'static, Result<()>> + Send + Sync;

/// A caller-supplied sync operation.
#[derive(Clone)]
pub struct SyncCallback(Arc<CallbackFn>);

impl SyncCallback {
    /// Wrap an async function taking the host's client and the sync kwargs.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(StripeClient, SyncParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        Self(Arc::new(
            move |client: StripeClient, params: SyncParams| -> BoxFuture<'static, Result<()>> {
                Box::pin(f(client, params))
            },
        ))
    }

    async fn call(&self, client: StripeClient, params: SyncParams) -> Result<()> {
        (self.0)(client, params).await
    }
}

impl fmt::Debug for SyncCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SyncCallback(..)")
    }
}

/// The Stripe operation `stripe_sync` performs.
///
/// Parses from and displays as the dotted names Stripe's SDKs use, e.g.
/// `"Customer.create"`.
#[derive(Debug, Clone)]
pub enum SyncMethod {
    /// `Customer.create`
    CustomerCreate,
    /// `Customer.modify`; the customer ID is taken from the `id` kwarg.
    CustomerModify,
    /// `Charge.create`
    ChargeCreate,
    /// `Plan.create`
    PlanCreate,
    /// `Invoice.create`
    InvoiceCreate,
    /// `InvoiceItem.create`
    InvoiceItemCreate,
    /// `Subscription.create`
    SubscriptionCreate,
    /// Any other operation.
    Custom(SyncCallback),
}

impl SyncMethod {
    /// Build a custom sync method from an async function.
    pub fn custom<F, Fut>(f: F) -> Self
    where
        F: Fn(StripeClient, SyncParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        Self::Custom(SyncCallback::new(f))
    }

    /// The dotted name, or `"custom"` for callbacks.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CustomerCreate => "Customer.create",
            Self::CustomerModify => "Customer.modify",
            Self::ChargeCreate => "Charge.create",
            Self::PlanCreate => "Plan.create",
            Self::InvoiceCreate => "Invoice.create",
            Self::InvoiceItemCreate => "InvoiceItem.create",
            Self::SubscriptionCreate => "Subscription.create",
            Self::Custom(_) => "custom",
        }
    }

    /// Run the operation with `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if the Stripe call fails, or if `CustomerModify` is
    /// given no `id`.
    pub async fn invoke(&self, client: &StripeClient, params: SyncParams) -> Result<()> {
        match self {
            Self::CustomerCreate => {
                let customer = client.create_customer(&params).await?;
                tracing::debug!(customer_id = %customer.id, "Created Stripe customer");
            }
            Self::CustomerModify => {
                let mut params = params;
                let id = take_customer_id(&mut params)?;
                client.update_customer(&id, &params).await?;
                tracing::debug!(customer_id = %id, "Updated Stripe customer");
            }
            Self::ChargeCreate => {
                let charge = client.create_charge(&params).await?;
                tracing::debug!(charge_id = %charge.id, "Created Stripe charge");
            }
            Self::PlanCreate => {
                let plan = client.create_plan(&params).await?;
                tracing::debug!(plan_id = %plan.id, "Created Stripe plan");
            }
            Self::InvoiceCreate => {
                let invoice = client.create_invoice(&params).await?;
                tracing::debug!(invoice_id = %invoice.id, "Created Stripe invoice");
            }
            Self::InvoiceItemCreate => {
                let item = client.create_invoice_item(&params).await?;
                tracing::debug!(invoice_item_id = %item.id, "Created Stripe invoice item");
            }
            Self::SubscriptionCreate => {
                let subscription = client.create_subscription(&params).await?;
                tracing::debug!(subscription_id = %subscription.id, "Created Stripe subscription");
            }
            Self::Custom(callback) => callback.call(client.clone(), params).await?,
        }
        Ok(())
    }
}

fn take_customer_id(params: &mut SyncParams) -> Result<CustomerId> {
    match params.remove("id") {
        Some(serde_json::Value::String(id)) => Ok(id.parse()?),
        _ => Err(ZebraError::MissingField { field: "id" }),
    }
}

impl FromStr for SyncMethod {
    type Err = ZebraError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Customer.create" => Ok(Self::CustomerCreate),
            "Customer.modify" => Ok(Self::CustomerModify),
            "Charge.create" => Ok(Self::ChargeCreate),
            "Plan.create" => Ok(Self::PlanCreate),
            "Invoice.create" => Ok(Self::InvoiceCreate),
            "InvoiceItem.create" => Ok(Self::InvoiceItemCreate),
            "Subscription.create" => Ok(Self::SubscriptionCreate),
            other => Err(ZebraError::UnknownSyncMethod(other.to_string())),
        }
    }
}

impl fmt::Display for SyncMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What `stripe_sync` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Sync is disabled, has no kwargs, or has no method.
    Skipped,
    /// The sync method ran successfully.
    Synced,
}

/// Provides `stripe_sync()`.
#[async_trait]
pub trait StripeSyncMixin: StripeMixin {
    /// Run the host's sync method with its kwargs, if sync is fully configured.
    async fn stripe_sync(&self) -> Result<SyncOutcome> {
        if !self.stripe_sync_enabled() {
            tracing::debug!("Stripe sync disabled, skipping");
            return Ok(SyncOutcome::Skipped);
        }

        let params = self.stripe_sync_kwargs();
        if params.is_empty() {
            tracing::debug!("Stripe sync has no kwargs, skipping");
            return Ok(SyncOutcome::Skipped);
        }

        let Some(method) = self.stripe_sync_method() else {
            tracing::debug!("Stripe sync has no method, skipping");
            return Ok(SyncOutcome::Skipped);
        };

        tracing::debug!(method = %method, params = params.len(), "Running Stripe sync");
        method.invoke(&self.stripe(), params).await?;
        Ok(SyncOutcome::Synced)
    }
}
