//! Billing Agreements
//!
//! Request and response types for subscribing a payer to a registered plan.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Reference to a registered billing plan
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanRef {
    pub id: String,
}

/// Payer descriptor
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Payer {
    pub payment_method: String,
}

impl Payer {
    /// The only method classic agreements accept from this client
    pub fn paypal() -> Self {
        Self {
            payment_method: "paypal".into(),
        }
    }
}

/// Agreement creation payload
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AgreementRequest {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub plan: PlanRef,
    pub payer: Payer,
}

impl AgreementRequest {
    /// Agreement for `plan_id`, starting one hour from now
    ///
    /// The provider rejects start times in the past.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        plan_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            start_date: start_date_in_one_hour(),
            plan: PlanRef {
                id: plan_id.into(),
            },
            payer: Payer::paypal(),
        }
    }
}

/// Start timestamp in the provider's expected format, one hour ahead
fn start_date_in_one_hour() -> String {
    (Utc::now() + Duration::hours(1))
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}

/// HATEOAS link returned by the provider
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub rel: String,
    pub method: Option<String>,
}

/// Agreement as returned by the creation endpoint
#[derive(Clone, Debug, Deserialize)]
pub struct Agreement {
    pub id: Option<String>,
    pub state: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Agreement {
    /// The URL the payer must visit to approve the agreement
    pub fn approval_url(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.rel == "approval_url")
            .map(|link| link.href.as_str())
    }
}

/// Summary of an executed agreement
#[derive(Clone, Debug, Deserialize)]
pub struct ExecutedAgreement {
    /// Provider-assigned agreement id
    pub id: String,

    /// Agreement state, e.g. "Active"
    pub state: Option<String>,
}
