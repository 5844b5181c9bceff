//! Billing Plan Construction
//!
//! Maps flat subscription settings into the nested document PayPal's
//! plan-creation endpoint consumes.

use serde::{Deserialize, Serialize};

/// Charge frequency of a payment definition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
    Day,
    Week,
    Month,
    Year,
}

impl Frequency {
    pub fn as_str(&self) -> &str {
        match self {
            Frequency::Day => "DAY",
            Frequency::Week => "WEEK",
            Frequency::Month => "MONTH",
            Frequency::Year => "YEAR",
        }
    }
}

/// Payment definition kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentType {
    Regular,
    Trial,
}

impl PaymentType {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentType::Regular => "REGULAR",
            PaymentType::Trial => "TRIAL",
        }
    }
}

/// Plan duration kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanType {
    /// Bills until the agreement is cancelled
    Infinite,
    /// Bills for a fixed number of cycles
    Fixed,
}

impl PlanType {
    pub fn as_str(&self) -> &str {
        match self {
            PlanType::Infinite => "INFINITE",
            PlanType::Fixed => "FIXED",
        }
    }
}

/// What the provider does when the initial payment fails
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FailAction {
    Continue,
    Cancel,
}

impl FailAction {
    pub fn as_str(&self) -> &str {
        match self {
            FailAction::Continue => "CONTINUE",
            FailAction::Cancel => "CANCEL",
        }
    }
}

/// Currency amount; the v1 API takes the value as a string, e.g. "9.99"
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub currency: String,
    pub value: String,
}

/// One recurring charge definition inside a plan
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub definition_type: PaymentType,
    pub frequency: Frequency,
    pub frequency_interval: String,
    pub cycles: String,
    pub amount: Money,
}

/// Merchant-side plan preferences
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MerchantPreferences {
    pub auto_bill_amount: String,
    pub cancel_url: String,
    pub initial_fail_amount_action: FailAction,
    pub max_fail_attempts: String,
    pub return_url: String,
    pub setup_fee: Money,
}

/// Plan document as submitted to the creation endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BillingPlanRequest {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    pub payment_definitions: Vec<PaymentDefinition>,
    pub merchant_preferences: MerchantPreferences,
}

/// Plan as registered with the provider
#[derive(Clone, Debug, Deserialize)]
pub struct CreatedPlan {
    /// Provider-assigned plan id
    pub id: String,

    /// Plan state, e.g. "CREATED" or "ACTIVE"
    pub state: Option<String>,
}

/// Flat subscription settings
///
/// Immutable once handed to a [`crate::Subscription`]; the provider-assigned
/// plan id lives on the subscription, not here.
#[derive(Clone, Debug)]
pub struct PlanConfig {
    /// Plan name shown to the payer
    pub name: String,

    /// Plan description
    pub description: String,

    /// ISO currency code, e.g. "USD"
    pub currency: String,

    /// Recurring charge per cycle, e.g. "9.99"
    pub cost: String,

    /// One-time fee charged when the agreement is approved
    pub setup_fee: String,

    /// Number of billing cycles; 0 for INFINITE plans
    pub cycles: u32,

    /// Charge frequency
    pub frequency: Frequency,

    /// Units of `frequency` between charges
    pub frequency_interval: u32,

    /// Redirect after the payer approves
    pub return_url: String,

    /// Redirect if the payer backs out
    pub cancel_url: String,

    /// Bill the outstanding balance automatically in the next cycle
    pub auto_bill: bool,

    /// Action when the initial payment fails
    pub initial_fail_action: FailAction,

    /// Failed attempts before the agreement is suspended
    pub max_fail_attempts: u32,

    /// Payment definition kind
    pub payment_type: PaymentType,

    /// Plan duration kind
    pub plan_type: PlanType,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            currency: String::new(),
            cost: String::new(),
            setup_fee: String::new(),
            cycles: 0,
            frequency: Frequency::Month,
            frequency_interval: 1,
            return_url: String::new(),
            cancel_url: String::new(),
            auto_bill: true,
            initial_fail_action: FailAction::Continue,
            max_fail_attempts: 1,
            payment_type: PaymentType::Regular,
            plan_type: PlanType::Infinite,
        }
    }
}

impl PlanConfig {
    /// Build the nested plan document for the creation endpoint
    ///
    /// Pure mapping. The v1 schema takes counts and amounts as strings, so
    /// numeric fields are rendered here; the definition's `name` mirrors its
    /// kind, matching what the plan endpoint displays for single-definition
    /// plans.
    pub fn to_request(&self) -> BillingPlanRequest {
        BillingPlanRequest {
            name: self.name.clone(),
            description: self.description.clone(),
            plan_type: self.plan_type,
            payment_definitions: vec![PaymentDefinition {
                name: self.payment_type.as_str().to_string(),
                definition_type: self.payment_type,
                frequency: self.frequency,
                frequency_interval: self.frequency_interval.to_string(),
                cycles: self.cycles.to_string(),
                amount: Money {
                    currency: self.currency.clone(),
                    value: self.cost.clone(),
                },
            }],
            merchant_preferences: MerchantPreferences {
                auto_bill_amount: if self.auto_bill { "YES" } else { "NO" }.to_string(),
                cancel_url: self.cancel_url.clone(),
                initial_fail_amount_action: self.initial_fail_action,
                max_fail_attempts: self.max_fail_attempts.to_string(),
                return_url: self.return_url.clone(),
                setup_fee: Money {
                    currency: self.currency.clone(),
                    value: self.setup_fee.clone(),
                },
            },
        }
    }
}
