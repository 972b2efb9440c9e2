use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::card_charge::validate_amount;
use crate::core::traits::require_all;
use crate::core::{Currency, Result, Validate};

/// Default `payment_type` for bank-account debits
pub const ACCOUNT_PAYMENT_TYPE: &str = "account";

/// Bank account charge parameters (Nigerian and South African accounts)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountChargeRequest {
    #[serde(rename = "accountnumber")]
    pub account_number: String,

    /// Bank code as returned by bank listing
    #[serde(rename = "accountbank")]
    pub account_bank: String,

    pub amount: Decimal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    pub email: String,

    #[serde(rename = "phonenumber")]
    pub phone_number: String,

    #[serde(rename = "firstname")]
    pub first_name: String,

    #[serde(rename = "lastname")]
    pub last_name: String,

    #[serde(rename = "IP")]
    pub ip: String,

    #[serde(rename = "txRef")]
    pub tx_ref: String,

    pub payment_type: String,

    /// Date of birth (DDMMYYYY), required by some banks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passcode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_fingerprint: Option<String>,
}

impl Default for AccountChargeRequest {
    fn default() -> Self {
        Self {
            account_number: String::new(),
            account_bank: String::new(),
            amount: Decimal::ZERO,
            currency: None,
            country: None,
            email: String::new(),
            phone_number: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            ip: String::new(),
            tx_ref: String::new(),
            payment_type: ACCOUNT_PAYMENT_TYPE.to_string(),
            passcode: None,
            device_fingerprint: None,
        }
    }
}

impl AccountChargeRequest {
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn with_passcode(mut self, passcode: impl Into<String>) -> Self {
        self.passcode = Some(passcode.into());
        self
    }
}

impl Validate for AccountChargeRequest {
    fn validate(&self) -> Result<()> {
        require_all(&[
            ("accountnumber", self.account_number.as_str()),
            ("accountbank", self.account_bank.as_str()),
        ])?;
        validate_amount(self.amount)?;
        require_all(&[
            ("email", self.email.as_str()),
            ("phonenumber", self.phone_number.as_str()),
            ("firstname", self.first_name.as_str()),
            ("lastname", self.last_name.as_str()),
            ("IP", self.ip.as_str()),
            ("txRef", self.tx_ref.as_str()),
            ("payment_type", self.payment_type.as_str()),
        ])
    }
}
