//! PayPal REST Transport
//!
//! Token exchange and agreement execution against the v1 API.

use serde::Deserialize;

use crate::agreement::ExecutedAgreement;
use crate::config::PaypalConfig;
use crate::error::{BillingError, Result};

/// PayPal client wrapper
pub struct PaypalClient {
    http: reqwest::Client,
    config: PaypalConfig,
}

/// Token endpoint response; only the token itself is consumed
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl PaypalClient {
    /// Create a new PayPal client
    pub fn new(config: PaypalConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(PaypalConfig::from_env()?))
    }

    /// Get the active configuration
    pub fn config(&self) -> &PaypalConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// Exchange client credentials for a bearer token
    ///
    /// Tokens are not cached; each remote operation performs its own
    /// exchange.
    pub async fn access_token(&self) -> Result<String> {
        let response = self
            .http
            .post(self.endpoint("/v1/oauth2/token"))
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let body = response.text().await?;
        let token: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            BillingError::Auth(format!(
                "could not read an access token from the response; check that the \
                 client id and secret match the configured mode: {e}"
            ))
        })?;

        tracing::debug!(mode = %self.config.mode.as_str(), "Obtained access token");
        Ok(token.access_token)
    }

    /// Execute an approved billing agreement
    ///
    /// `payment_token` is the token PayPal appends to the return redirect
    /// after the payer approves the agreement.
    pub async fn execute_agreement(&self, payment_token: &str) -> Result<ExecutedAgreement> {
        if payment_token.is_empty() {
            return Err(BillingError::MissingPaymentToken);
        }

        let token = self.access_token().await?;
        let url = self.endpoint(&format!(
            "/v1/payments/billing-agreements/{payment_token}/agreement-execute"
        ));

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Agreement execution rejected");
            return Err(BillingError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let executed: ExecutedAgreement = response.json().await?;
        tracing::info!(agreement_id = %executed.id, "Executed billing agreement");
        Ok(executed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard) -> PaypalClient {
        let config = PaypalConfig::new(Mode::Sandbox, "client-id", "client-secret")
            .with_api_base(server.url());
        PaypalClient::new(config)
    }

    #[tokio::test]
    async fn test_access_token_exchange() {
        let mut server = mockito::Server::new_async().await;
        let token_mock = server
            .mock("POST", "/v1/oauth2/token")
            .match_header("authorization", Matcher::Regex("^Basic ".into()))
            .match_body(Matcher::UrlEncoded(
                "grant_type".into(),
                "client_credentials".into(),
            ))
            .with_status(200)
            .with_body(r#"{"access_token":"A21AAFy","token_type":"Bearer","expires_in":32400}"#)
            .create_async()
            .await;

        let token = client_for(&server).access_token().await.unwrap();
        assert_eq!(token, "A21AAFy");
        token_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_access_token_parse_failure_is_descriptive() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/oauth2/token")
            .with_status(401)
            .with_body(r#"{"error":"invalid_client","error_description":"Client Authentication failed"}"#)
            .create_async()
            .await;

        let err = client_for(&server).access_token().await.unwrap_err();
        match err {
            BillingError::Auth(msg) => {
                assert!(msg.contains("client id and secret"));
            }
            other => panic!("expected Auth error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_execute_agreement_rejects_empty_token() {
        let client = PaypalClient::new(PaypalConfig::new(Mode::Sandbox, "id", "secret"));
        let err = client.execute_agreement("").await.unwrap_err();
        assert!(matches!(err, BillingError::MissingPaymentToken));
    }

    #[tokio::test]
    async fn test_execute_agreement_returns_summary() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/oauth2/token")
            .with_status(200)
            .with_body(r#"{"access_token":"A21AAFy"}"#)
            .create_async()
            .await;
        server
            .mock(
                "POST",
                "/v1/payments/billing-agreements/EC-0JP008296V451950C/agreement-execute",
            )
            .match_header("authorization", "Bearer A21AAFy")
            .with_status(200)
            .with_body(r#"{"id":"I-1TJ3GAGG82Y9","state":"Active"}"#)
            .create_async()
            .await;

        let executed = client_for(&server)
            .execute_agreement("EC-0JP008296V451950C")
            .await
            .unwrap();
        assert_eq!(executed.id, "I-1TJ3GAGG82Y9");
        assert_eq!(executed.state.as_deref(), Some("Active"));
    }

    #[tokio::test]
    async fn test_execute_agreement_surfaces_provider_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/oauth2/token")
            .with_status(200)
            .with_body(r#"{"access_token":"A21AAFy"}"#)
            .create_async()
            .await;
        server
            .mock(
                "POST",
                "/v1/payments/billing-agreements/EC-EXPIRED/agreement-execute",
            )
            .with_status(400)
            .with_body(r#"{"name":"PAYMENT_TOKEN_EXPIRED","message":"The payment token has expired."}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .execute_agreement("EC-EXPIRED")
            .await
            .unwrap_err();
        match err {
            BillingError::Api { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("PAYMENT_TOKEN_EXPIRED"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
