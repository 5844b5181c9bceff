//! Billing Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, BillingError>;

/// Billing-related errors
#[derive(Error, Debug)]
pub enum BillingError {
    /// No plan id stored yet; the plan must be created first
    #[error("no billing plan id: create the plan before calling {0}")]
    MissingPlanId(&'static str),

    /// Empty payment token passed to agreement execution
    #[error("a payment token is required to execute the billing agreement")]
    MissingPaymentToken,

    /// Agreement was created but the provider returned no approval link
    #[error("agreement response carried no approval_url link")]
    MissingApprovalLink,

    /// Access token exchange failed
    #[error("access token error: {0}")]
    Auth(String),

    /// PayPal rejected the request
    #[error("PayPal API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl BillingError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            BillingError::Http(_) => true,
            BillingError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            BillingError::MissingPlanId(_) => "The subscription plan has not been created yet.",
            BillingError::MissingPaymentToken => {
                "A payment token is required to confirm the subscription."
            }
            BillingError::MissingApprovalLink => {
                "The payment provider did not return an approval link."
            }
            BillingError::Auth(_) => {
                "Authentication with the payment provider failed. Check your credentials."
            }
            BillingError::Api { .. } => "The payment provider rejected the request.",
            BillingError::Config(_) => "Service configuration error.",
            BillingError::Http(_) => "Could not reach the payment provider. Please try again.",
        }
    }
}
