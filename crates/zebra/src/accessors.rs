//! Per-resource accessors.
//!
//! Each mixin reads one ID from the host and retrieves the matching object
//! through [`StripeMixin::stripe`]. A missing ID fails before any request
//! is made; Stripe errors come back unchanged.

use async_trait::async_trait;
use zebra_stripe::{Charge, Customer, Invoice, InvoiceItem, Plan, Subscription};

use crate::error::{require, Result};
use crate::handle::StripeMixin;

/// Provides `stripe_customer()`, looked up by `stripe_customer_id`.
#[async_trait]
pub trait StripeCustomerMixin: StripeMixin {
    /// Retrieve this host's customer.
    async fn stripe_customer(&self) -> Result<Customer> {
        let id = require(self.stripe_customer_id(), "stripe_customer_id")?;
        Ok(self.stripe().retrieve_customer(&id).await?)
    }
}

/// Provides `stripe_subscription()`, read off the host's customer.
#[async_trait]
pub trait StripeSubscriptionMixin: StripeCustomerMixin {
    /// The customer's subscription, `None` when it has none.
    ///
    /// Goes through `stripe_customer()`, so an overridden customer accessor
    /// is honored.
    async fn stripe_subscription(&self) -> Result<Option<Subscription>> {
        let customer = self.stripe_customer().await?;
        Ok(customer.subscription)
    }
}

/// Provides `stripe_plan()`, looked up by `stripe_plan_id`.
#[async_trait]
pub trait StripePlanMixin: StripeMixin {
    /// Retrieve this host's plan.
    async fn stripe_plan(&self) -> Result<Plan> {
        let id = require(self.stripe_plan_id(), "stripe_plan_id")?;
        Ok(self.stripe().retrieve_plan(&id).await?)
    }
}

/// Provides `stripe_invoice()`, looked up by `stripe_invoice_id`.
#[async_trait]
pub trait StripeInvoiceMixin: StripeMixin {
    /// Retrieve this host's invoice.
    async fn stripe_invoice(&self) -> Result<Invoice> {
        let id = require(self.stripe_invoice_id(), "stripe_invoice_id")?;
        Ok(self.stripe().retrieve_invoice(&id).await?)
    }
}

/// Provides `stripe_invoice_item()`, looked up by `stripe_invoice_item_id`.
#[async_trait]
pub trait StripeInvoiceItemMixin: StripeMixin {
    /// Retrieve this host's invoice item.
    async fn stripe_invoice_item(&self) -> Result<InvoiceItem> {
        let id = require(self.stripe_invoice_item_id(), "stripe_invoice_item_id")?;
        Ok(self.stripe().retrieve_invoice_item(&id).await?)
    }
}

/// Provides `stripe_charge()`, looked up by `stripe_charge_id`.
#[async_trait]
pub trait StripeChargeMixin: StripeMixin {
    /// Retrieve this host's charge.
    async fn stripe_charge(&self) -> Result<Charge> {
        let id = require(self.stripe_charge_id(), "stripe_charge_id")?;
        Ok(self.stripe().retrieve_charge(&id).await?)
    }
}
