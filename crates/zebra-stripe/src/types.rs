//! Stripe API types.
//!
//! Only the fields the mixins and their callers commonly read are modeled.
//! Everything else in the response is ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use zebra_core::{ChargeId, CustomerId, InvoiceId, InvoiceItemId, PlanId, SubscriptionId};

fn timestamp(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}

/// Stripe customer object.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    /// Stripe customer ID.
    pub id: CustomerId,
    /// Customer email.
    #[serde(default)]
    pub email: Option<String>,
    /// Customer name.
    #[serde(default)]
    pub name: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Current balance in the smallest currency unit.
    #[serde(default)]
    pub balance: i64,
    /// Whether the latest invoice is past due.
    #[serde(default)]
    pub delinquent: Option<bool>,
    /// The customer's active subscription, when the API returns one inline.
    #[serde(default)]
    pub subscription: Option<Subscription>,
    /// Subscriptions list, when expanded.
    #[serde(default)]
    pub subscriptions: Option<StripeList<Subscription>>,
    /// Metadata attached to the customer.
    #[serde(default)]
    pub metadata: serde_json::Value,
    /// Created timestamp (Unix).
    #[serde(default)]
    pub created: i64,
}

impl Customer {
    /// Creation time, if the timestamp is in range.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        timestamp(self.created)
    }
}

/// Stripe subscription object.
#[derive(Debug, Clone, Deserialize)]
pub struct Subscription {
    /// Subscription ID.
    pub id: SubscriptionId,
    /// Status (active, `past_due`, canceled, ...).
    #[serde(default)]
    pub status: String,
    /// Owning customer ID.
    #[serde(default)]
    pub customer: Option<String>,
    /// Plan the customer is subscribed to.
    #[serde(default)]
    pub plan: Option<Plan>,
    /// Quantity of the plan.
    #[serde(default)]
    pub quantity: Option<u64>,
    /// End of the current billing period (Unix).
    #[serde(default)]
    pub current_period_end: Option<i64>,
    /// Whether the subscription ends at period end.
    #[serde(default)]
    pub cancel_at_period_end: bool,
    /// Metadata.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Subscription {
    /// Whether the subscription is currently billable.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.status.as_str(), "active" | "trialing")
    }

    /// End of the current period, if known.
    #[must_use]
    pub fn current_period_end_at(&self) -> Option<DateTime<Utc>> {
        self.current_period_end.and_then(timestamp)
    }
}

/// Stripe plan object.
#[derive(Debug, Clone, Deserialize)]
pub struct Plan {
    /// Plan ID.
    pub id: PlanId,
    /// Amount per interval in the smallest currency unit.
    #[serde(default)]
    pub amount: Option<i64>,
    /// Currency (e.g., "usd").
    #[serde(default)]
    pub currency: String,
    /// Billing interval (day, week, month, year).
    #[serde(default)]
    pub interval: String,
    /// Number of intervals between billings.
    #[serde(default = "default_interval_count")]
    pub interval_count: u32,
    /// Display name.
    #[serde(default)]
    pub nickname: Option<String>,
    /// Whether new subscriptions may use the plan.
    #[serde(default)]
    pub active: bool,
    /// Trial length in days.
    #[serde(default)]
    pub trial_period_days: Option<u32>,
    /// Metadata.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

const fn default_interval_count() -> u32 {
    1
}

/// Stripe invoice object.
#[derive(Debug, Clone, Deserialize)]
pub struct Invoice {
    /// Invoice ID.
    pub id: InvoiceId,
    /// Customer being billed.
    #[serde(default)]
    pub customer: Option<String>,
    /// Subscription the invoice belongs to.
    #[serde(default)]
    pub subscription: Option<String>,
    /// Status (draft, open, paid, uncollectible, void).
    #[serde(default)]
    pub status: Option<String>,
    /// Amount due in the smallest currency unit.
    #[serde(default)]
    pub amount_due: i64,
    /// Amount paid in the smallest currency unit.
    #[serde(default)]
    pub amount_paid: i64,
    /// Currency.
    #[serde(default)]
    pub currency: String,
    /// Whether the invoice has been paid.
    #[serde(default)]
    pub paid: bool,
    /// Created timestamp (Unix).
    #[serde(default)]
    pub created: i64,
    /// Metadata.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Invoice {
    /// Creation time, if the timestamp is in range.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        timestamp(self.created)
    }
}

/// Stripe invoice item object.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceItem {
    /// Invoice item ID.
    pub id: InvoiceItemId,
    /// Customer the item is billed to.
    #[serde(default)]
    pub customer: Option<String>,
    /// Invoice the item is attached to, once invoiced.
    #[serde(default)]
    pub invoice: Option<String>,
    /// Amount in the smallest currency unit.
    #[serde(default)]
    pub amount: i64,
    /// Currency.
    #[serde(default)]
    pub currency: String,
    /// Description shown on the invoice.
    #[serde(default)]
    pub description: Option<String>,
    /// Metadata.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Stripe charge object.
#[derive(Debug, Clone, Deserialize)]
pub struct Charge {
    /// Charge ID.
    pub id: ChargeId,
    /// Amount in the smallest currency unit.
    #[serde(default)]
    pub amount: i64,
    /// Amount refunded so far.
    #[serde(default)]
    pub amount_refunded: i64,
    /// Currency.
    #[serde(default)]
    pub currency: String,
    /// Customer charged.
    #[serde(default)]
    pub customer: Option<String>,
    /// Status (succeeded, pending, failed).
    #[serde(default)]
    pub status: String,
    /// Whether the charge succeeded.
    #[serde(default)]
    pub paid: bool,
    /// Whether the charge was fully refunded.
    #[serde(default)]
    pub refunded: bool,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Failure message, when the charge failed.
    #[serde(default)]
    pub failure_message: Option<String>,
    /// Created timestamp (Unix).
    #[serde(default)]
    pub created: i64,
    /// Metadata.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Charge {
    /// Creation time, if the timestamp is in range.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        timestamp(self.created)
    }

    /// Amount formatted as major units, e.g. `$12.50` for usd.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn amount_formatted(&self) -> String {
        let major = self.amount as f64 / 100.0;
        if self.currency.eq_ignore_ascii_case("usd") {
            format!("${major:.2}")
        } else {
            format!("{major:.2} {}", self.currency.to_uppercase())
        }
    }
}

/// Stripe list response wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeList<T> {
    /// Data items.
    pub data: Vec<T>,
    /// Whether there are more items.
    #[serde(default)]
    pub has_more: bool,
    /// URL for the list endpoint.
    #[serde(default)]
    pub url: Option<String>,
}

/// Stripe API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    /// Error details.
    pub error: StripeErrorDetail,
}

/// Stripe error detail.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorDetail {
    /// Error type.
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error message.
    #[serde(default)]
    pub message: String,
    /// Error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Parameter that caused the error.
    #[serde(default)]
    pub param: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn customer_with_inline_subscription() {
        let customer: Customer = serde_json::from_value(json!({
            "id": "cus_1",
            "object": "customer",
            "email": "a@b.com",
            "created": 1_700_000_000,
            "subscription": {
                "id": "sub_1",
                "status": "active",
                "plan": { "id": "gold", "amount": 999, "currency": "usd", "interval": "month" }
            }
        }))
        .unwrap();

        let sub = customer.subscription.as_ref().unwrap();
        assert_eq!(sub.id.as_str(), "sub_1");
        assert!(sub.is_active());
        assert_eq!(sub.plan.as_ref().unwrap().interval_count, 1);
        assert!(customer.created_at().is_some());
    }

    #[test]
    fn customer_without_subscription() {
        let customer: Customer = serde_json::from_value(json!({ "id": "cus_2" })).unwrap();
        assert!(customer.subscription.is_none());
        assert_eq!(customer.balance, 0);
    }

    #[test]
    fn charge_amount_formatting() {
        let charge: Charge = serde_json::from_value(json!({
            "id": "ch_1", "amount": 1250, "currency": "usd", "paid": true
        }))
        .unwrap();
        assert_eq!(charge.amount_formatted(), "$12.50");

        let eur: Charge = serde_json::from_value(json!({
            "id": "ch_2", "amount": 300, "currency": "eur"
        }))
        .unwrap();
        assert_eq!(eur.amount_formatted(), "3.00 EUR");
    }

    #[test]
    fn error_response_parses() {
        let body: StripeErrorResponse = serde_json::from_value(json!({
            "error": {
                "type": "invalid_request_error",
                "message": "No such customer: 'cus_x'",
                "code": "resource_missing",
                "param": "id"
            }
        }))
        .unwrap();
        assert_eq!(body.error.code.as_deref(), Some("resource_missing"));
        assert_eq!(body.error.param.as_deref(), Some("id"));
    }
}
