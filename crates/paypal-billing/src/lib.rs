//! # paypal-billing
//!
//! PayPal recurring-billing client: billing plans and subscription
//! agreements over the v1 REST API.
//!
//! ## Recurring billing flow
//!
//! PayPal's classic subscriptions run in two parts: a reusable **billing
//! plan** (the recurring-charge template) and a per-payer **billing
//! agreement** (the payer's acceptance of that plan).
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌─────────────┐
//! │  Your Site  │────▶│  PayPal Approval │────▶│  Your Site  │
//! │ (subscribe) │     │       Page       │     │ (return_url)│
//! └─────────────┘     └──────────────────┘     └─────────────┘
//!        │                                            │
//!   create + activate plan,                 execute the agreement
//!   create billing agreement                with the payment token
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use paypal_billing::{Mode, PaypalClient, PaypalConfig, PlanConfig, Subscription};
//!
//! let client = PaypalClient::new(PaypalConfig::new(Mode::Sandbox, "id", "secret"));
//!
//! let plan = PlanConfig {
//!     name: "Gold".into(),
//!     description: "Monthly gold tier".into(),
//!     currency: "USD".into(),
//!     cost: "9.99".into(),
//!     return_url: "https://yoursite.com/subscribed".into(),
//!     cancel_url: "https://yoursite.com/pricing".into(),
//!     ..Default::default()
//! };
//!
//! let mut subscription = Subscription::new(client, plan);
//! subscription.create().await?;
//! subscription.activate().await?;
//!
//! // Redirect the payer to the approval URL...
//! let approval_url = subscription.billing_agreement(None).await?;
//!
//! // ...then execute with the token from the return redirect.
//! let executed = subscription.client().execute_agreement("EC-123").await?;
//! ```

mod agreement;
mod client;
mod config;
mod error;
mod plan;
mod subscription;

pub use agreement::{Agreement, AgreementRequest, ExecutedAgreement, Link, Payer, PlanRef};
pub use client::PaypalClient;
pub use config::{Mode, PaypalConfig};
pub use error::{BillingError, Result};
pub use plan::{
    BillingPlanRequest, CreatedPlan, FailAction, Frequency, MerchantPreferences, Money,
    PaymentDefinition, PaymentType, PlanConfig, PlanType,
};
pub use subscription::Subscription;
