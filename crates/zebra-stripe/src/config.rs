//! Stripe client configuration.

use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Default Stripe API origin.
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Configuration for a `StripeClient`.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (optional; hosts may supply their own).
    pub api_key: Option<String>,

    /// API origin, without the `/v1` suffix (default: `https://api.stripe.com`).
    pub api_base: String,

    /// Pinned API version sent as `Stripe-Version` (optional).
    pub api_version: Option<String>,

    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("api_version", &self.api_version)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// Stripe secrets file structure.
#[derive(Debug, Deserialize)]
struct StripeSecrets {
    api_key: String,
    #[serde(default)]
    api_base: Option<String>,
    #[serde(default)]
    api_version: Option<String>,
}

impl StripeConfig {
    /// Load configuration from a secrets file or environment variables.
    ///
    /// The secrets file is read from `$STRIPE_SECRETS_FILE` when set, otherwise
    /// from `.secrets/stripe.json` or `../.secrets/stripe.json`. Values it doesn't
    /// set come from `STRIPE_API_KEY`, `STRIPE_API_BASE`, `STRIPE_API_VERSION`
    /// and `STRIPE_TIMEOUT_SECONDS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration using `lookup` in place of the process environment.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let paths = secret_paths(lookup("STRIPE_SECRETS_FILE"));

        let secrets = paths.iter().find_map(|path| match load_secrets_file(path) {
            Ok(secrets) => {
                tracing::info!(path = %path, "Loaded Stripe secrets from file");
                Some(secrets)
            }
            Err(_) => None,
        });

        if secrets.is_none() {
            tracing::debug!("Stripe secrets file not found, using environment variables");
        }

        let (file_key, file_base, file_version) = match secrets {
            Some(s) => (Some(s.api_key), s.api_base, s.api_version),
            None => (None, None, None),
        };

        Self {
            api_key: file_key.or_else(|| lookup("STRIPE_API_KEY")),
            api_base: file_base
                .or_else(|| lookup("STRIPE_API_BASE"))
                .unwrap_or_else(|| DEFAULT_API_BASE.into()),
            api_version: file_version.or_else(|| lookup("STRIPE_API_VERSION")),
            timeout_seconds: lookup("STRIPE_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    /// Configuration with an explicit API key and default everything else.
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.into(),
            api_version: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// Candidate secrets files. An explicit path replaces the relative fallbacks.
fn secret_paths(explicit: Option<String>) -> Vec<String> {
    match explicit {
        Some(path) => vec![path],
        None => vec![
            ".secrets/stripe.json".to_string(),
            "../.secrets/stripe.json".to_string(),
        ],
    }
}

/// Load secrets from a JSON file.
fn load_secrets_file(path: &str) -> Result<StripeSecrets, std::io::Error> {
    let path = Path::new(path);
    if !path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Secrets file not found",
        ));
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
