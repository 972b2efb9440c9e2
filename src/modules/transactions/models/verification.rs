use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::traits::require;
use crate::core::{Currency, RaveError, Result, Validate};

pub use crate::core::error::VerificationFailure;

/// Message the gateway returns when a stored transaction was found
pub const TX_FETCHED_MESSAGE: &str = "Tx Fetched";

/// Charge codes that mean the charge went through
pub const SUCCESSFUL_CHARGE_CODES: [&str; 2] = ["00", "0"];

/// Verify a transaction through the standard verify endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTransactionRequest {
    pub flw_ref: String,

    /// Amount the merchant expects to have been charged
    pub amount: Decimal,

    pub currency: Currency,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize: Option<String>,
}

impl VerifyTransactionRequest {
    pub fn new(flw_ref: impl Into<String>, amount: Decimal, currency: Currency) -> Self {
        Self {
            flw_ref: flw_ref.into(),
            amount,
            currency,
            normalize: Some("1".to_string()),
        }
    }

    pub fn expectation(&self) -> Expectation<'_> {
        Expectation {
            flw_ref: &self.flw_ref,
            amount: self.amount,
            currency: self.currency,
        }
    }
}

/// Verify a transaction through xrequery, which can also look up by `tx_ref`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XrequeryRequest {
    pub flw_ref: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_ref: Option<String>,

    pub amount: Decimal,

    pub currency: Currency,

    /// `"1"` restricts the reply to the latest attempt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_attempt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_attempt: Option<String>,
}

impl XrequeryRequest {
    pub fn new(flw_ref: impl Into<String>, amount: Decimal, currency: Currency) -> Self {
        Self {
            flw_ref: flw_ref.into(),
            tx_ref: None,
            amount,
            currency,
            last_attempt: None,
            only_attempt: None,
        }
    }

    pub fn with_tx_ref(mut self, tx_ref: impl Into<String>) -> Self {
        self.tx_ref = Some(tx_ref.into());
        self
    }

    pub fn last_attempt_only(mut self) -> Self {
        self.last_attempt = Some("1".to_string());
        self.only_attempt = Some("1".to_string());
        self
    }

    pub fn expectation(&self) -> Expectation<'_> {
        Expectation {
            flw_ref: &self.flw_ref,
            amount: self.amount,
            currency: self.currency,
        }
    }
}

impl Validate for VerifyTransactionRequest {
    fn validate(&self) -> Result<()> {
        validate_expectation(&self.expectation())
    }
}

impl Validate for XrequeryRequest {
    fn validate(&self) -> Result<()> {
        validate_expectation(&self.expectation())
    }
}

fn validate_expectation(expected: &Expectation<'_>) -> Result<()> {
    if expected.amount.is_sign_negative() {
        return Err(RaveError::InvalidPayload(
            "amount must not be negative".to_string(),
        ));
    }
    require("flw_ref", expected.flw_ref)
}

/// What the merchant believes about a transaction
#[derive(Debug, Clone, Copy)]
pub struct Expectation<'a> {
    pub flw_ref: &'a str,
    pub amount: Decimal,
    pub currency: Currency,
}

/// A transaction that passed all five verification steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedTransaction {
    pub flw_ref: String,
    pub charge_code: String,
    pub currency: String,
    pub charged_amount: Decimal,

    /// Full gateway reply
    pub response: Value,
}
