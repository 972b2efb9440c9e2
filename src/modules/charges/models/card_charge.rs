use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::traits::{require, require_all};
use crate::core::{Currency, RaveError, Result, Validate};

/// `suggested_auth` value that selects the PIN flow
pub const PIN_AUTH: &str = "PIN";

/// Card charge parameters, serialized with the gateway's field names
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CardChargeRequest {
    #[serde(rename = "cardno")]
    pub card_number: String,

    pub cvv: String,

    #[serde(rename = "expirymonth")]
    pub expiry_month: String,

    #[serde(rename = "expiryyear")]
    pub expiry_year: String,

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

    pub redirect_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_auth: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_fingerprint: Option<String>,

    /// `"preauth"` for a preauthorization, absent for a normal charge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_type: Option<String>,
}

impl CardChargeRequest {
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_pin(mut self, pin: impl Into<String>) -> Self {
        self.pin = Some(pin.into());
        self
    }

    pub fn with_device_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.device_fingerprint = Some(fingerprint.into());
        self
    }

    /// True once the request has been switched to the PIN flow
    pub fn uses_pin_auth(&self) -> bool {
        self.suggested_auth
            .as_deref()
            .map(|auth| auth.eq_ignore_ascii_case(PIN_AUTH))
            .unwrap_or(false)
    }

    /// Card number reduced to BIN and last four digits
    pub fn masked_card_number(&self) -> String {
        mask_card_number(&self.card_number)
    }
}

impl Validate for CardChargeRequest {
    fn validate(&self) -> Result<()> {
        require_all(&[
            ("cardno", self.card_number.as_str()),
            ("cvv", self.cvv.as_str()),
            ("expirymonth", self.expiry_month.as_str()),
            ("expiryyear", self.expiry_year.as_str()),
        ])?;
        validate_amount(self.amount)?;
        require_all(&[
            ("email", self.email.as_str()),
            ("phonenumber", self.phone_number.as_str()),
            ("firstname", self.first_name.as_str()),
            ("lastname", self.last_name.as_str()),
            ("IP", self.ip.as_str()),
            ("txRef", self.tx_ref.as_str()),
            ("redirect_url", self.redirect_url.as_str()),
        ])
    }
}

// Card data never reaches logs in clear
impl fmt::Debug for CardChargeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardChargeRequest")
            .field("card_number", &self.masked_card_number())
            .field("cvv", &"***")
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("amount", &self.amount)
            .field("currency", &self.currency)
            .field("country", &self.country)
            .field("email", &self.email)
            .field("tx_ref", &self.tx_ref)
            .field("pin", &self.pin.as_ref().map(|_| "***"))
            .field("suggested_auth", &self.suggested_auth)
            .field("charge_type", &self.charge_type)
            .finish_non_exhaustive()
    }
}

/// Amounts must be present, meaning strictly positive
pub(crate) fn validate_amount(amount: Decimal) -> Result<()> {
    if amount.is_zero() {
        return require("amount", "");
    }
    if amount.is_sign_negative() {
        return Err(RaveError::InvalidPayload(
            "amount must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn mask_card_number(card_number: &str) -> String {
    let digits: Vec<char> = card_number.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() < 10 {
        return "*".repeat(digits.len());
    }
    let head: String = digits[..6].iter().collect();
    let tail: String = digits[digits.len() - 4..].iter().collect();
    format!("{}{}{}", head, "*".repeat(digits.len() - 10), tail)
}
