//! Subscription Lifecycle
//!
//! Owns a plan configuration and drives it through the provider: register
//! the plan, activate it, subscribe a payer, cancel.

use serde_json::json;

use crate::agreement::{Agreement, AgreementRequest};
use crate::client::PaypalClient;
use crate::error::{BillingError, Result};
use crate::plan::{CreatedPlan, PlanConfig};

/// A recurring subscription backed by a PayPal billing plan
///
/// The plan settings are fixed at construction; the only mutation is the
/// provider-assigned plan id, stored once by [`Subscription::create`].
pub struct Subscription {
    client: PaypalClient,
    plan: PlanConfig,
    billing_plan_id: Option<String>,
}

impl Subscription {
    /// Create a subscription over a not-yet-registered plan
    pub fn new(client: PaypalClient, plan: PlanConfig) -> Self {
        Self {
            client,
            plan,
            billing_plan_id: None,
        }
    }

    /// Get the underlying client
    pub fn client(&self) -> &PaypalClient {
        &self.client
    }

    /// Get the plan settings
    pub fn plan(&self) -> &PlanConfig {
        &self.plan
    }

    /// Provider-assigned plan id, once [`Subscription::create`] has succeeded
    pub fn billing_plan_id(&self) -> Option<&str> {
        self.billing_plan_id.as_deref()
    }

    fn require_plan_id(&self, operation: &'static str) -> Result<&str> {
        self.billing_plan_id
            .as_deref()
            .ok_or(BillingError::MissingPlanId(operation))
    }

    /// Register the billing plan with the provider
    ///
    /// Stores and returns the assigned plan id.
    pub async fn create(&mut self) -> Result<String> {
        let token = self.client.access_token().await?;
        let request = self.plan.to_request();

        let response = self
            .client
            .http()
            .post(self.client.endpoint("/v1/payments/billing-plans"))
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Billing plan creation rejected");
            return Err(BillingError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let created: CreatedPlan = response.json().await?;
        tracing::info!(plan_id = %created.id, "Created billing plan");
        self.billing_plan_id = Some(created.id.clone());
        Ok(created.id)
    }

    /// Switch the registered plan to the ACTIVE state
    pub async fn activate(&self) -> Result<()> {
        let plan_id = self.require_plan_id("activate")?;
        let token = self.client.access_token().await?;
        let patch = json!([{
            "op": "replace",
            "path": "/",
            "value": { "state": "ACTIVE" }
        }]);

        let response = self
            .client
            .http()
            .patch(
                self.client
                    .endpoint(&format!("/v1/payments/billing-plans/{plan_id}")),
            )
            .bearer_auth(token)
            .json(&patch)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Billing plan activation rejected");
            return Err(BillingError::Api {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(plan_id = %plan_id, "Activated billing plan");
        Ok(())
    }

    /// Subscribe a payer to the registered plan
    ///
    /// Returns the approval URL the payer must visit to confirm the
    /// agreement.
    pub async fn billing_agreement(&self, description: Option<&str>) -> Result<String> {
        let plan_id = self.require_plan_id("billing_agreement")?;
        let token = self.client.access_token().await?;
        let request = AgreementRequest::new(
            self.plan.name.clone(),
            description.unwrap_or("Subscription agreement."),
            plan_id,
        );

        let response = self
            .client
            .http()
            .post(self.client.endpoint("/v1/payments/billing-agreements"))
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Billing agreement rejected");
            return Err(BillingError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let agreement: Agreement = response.json().await?;
        let approval_url = agreement
            .approval_url()
            .ok_or(BillingError::MissingApprovalLink)?;

        tracing::info!(
            agreement_id = ?agreement.id,
            plan_id = %plan_id,
            "Created billing agreement"
        );
        Ok(approval_url.to_string())
    }

    /// Cancel the registered plan
    ///
    /// `reason` defaults to "User cancellation." when not given.
    pub async fn cancel(&self, reason: Option<&str>) -> Result<()> {
        let plan_id = self.require_plan_id("cancel")?;
        let reason = reason.unwrap_or("User cancellation.");
        let token = self.client.access_token().await?;

        let response = self
            .client
            .http()
            .post(
                self.client
                    .endpoint(&format!("/v1/billing/{plan_id}/cancel")),
            )
            .bearer_auth(token)
            .json(&json!({ "reason": reason }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                plan_id = %plan_id,
                "Cancellation rejected"
            );
            return Err(BillingError::Api {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(plan_id = %plan_id, reason = %reason, "Cancelled billing plan");
        Ok(())
    }
}
