//! Client Configuration
//!
//! Environment selection (live vs sandbox) and REST API credentials.

use crate::error::{BillingError, Result};

/// PayPal environment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Production environment
    Live,
    /// Test environment
    Sandbox,
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Live => "live",
            Mode::Sandbox => "sandbox",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "live" => Mode::Live,
            _ => Mode::Sandbox,
        }
    }

    /// Base URL of the REST API for this environment
    pub fn api_base(&self) -> &'static str {
        match self {
            Mode::Live => "https://api.paypal.com",
            Mode::Sandbox => "https://api.sandbox.paypal.com",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Sandbox
    }
}

/// PayPal client configuration
#[derive(Clone, Debug)]
pub struct PaypalConfig {
    /// Environment to talk to
    pub mode: Mode,

    /// REST API client id
    pub client_id: String,

    /// REST API client secret
    pub client_secret: String,

    /// Explicit base URL override; when set it wins over the mode's URL
    pub api_base: Option<String>,
}

impl PaypalConfig {
    /// Create a new configuration for the given environment
    pub fn new(mode: Mode, client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            mode,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            api_base: None,
        }
    }

    /// Create from environment variables
    ///
    /// Reads `PAYPAL_CLIENT_ID` and `PAYPAL_CLIENT_SECRET`; `PAYPAL_MODE`
    /// defaults to sandbox when unset.
    pub fn from_env() -> Result<Self> {
        let mode = std::env::var("PAYPAL_MODE")
            .map(|m| Mode::from_str(&m))
            .unwrap_or_default();
        let client_id = std::env::var("PAYPAL_CLIENT_ID")
            .map_err(|_| BillingError::Config("PAYPAL_CLIENT_ID not set".into()))?;
        let client_secret = std::env::var("PAYPAL_CLIENT_SECRET")
            .map_err(|_| BillingError::Config("PAYPAL_CLIENT_SECRET not set".into()))?;

        Ok(Self::new(mode, client_id, client_secret))
    }

    /// Point the client at an explicit base URL
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Resolved base URL for all requests
    pub fn base_url(&self) -> &str {
        self.api_base
            .as_deref()
            .unwrap_or_else(|| self.mode.api_base())
    }
}
