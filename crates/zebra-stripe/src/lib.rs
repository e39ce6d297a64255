//! Stripe API client for zebra.
//!
//! This crate is the SDK handle the mixins delegate to. It covers the
//! retrieve calls behind each accessor and the create/update calls used by
//! sync.
//!
//! # Example
//!
//! ```no_run
//! use zebra_stripe::{StripeClient, StripeConfig};
//!
//! # async fn example() -> Result<(), zebra_stripe::StripeError> {
//! let client = StripeClient::from_config(&StripeConfig::from_env())?;
//!
//! let customer = client.retrieve_customer(&"cus_123".parse()?).await?;
//! println!("{} <{:?}>", customer.id, customer.email);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
pub mod config;
mod error;
pub mod form;
pub mod types;

pub use client::StripeClient;
pub use config::StripeConfig;
pub use error::StripeError;
pub use types::*;
