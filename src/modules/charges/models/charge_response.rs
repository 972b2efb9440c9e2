use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::card_charge::PIN_AUTH;
use crate::client::ApiResponse;
use crate::core::amount::deserialize_optional_amount;

/// Charge response code for a charge awaiting OTP validation
pub const PENDING_VALIDATION_CODE: &str = "02";

/// Reply to a card or account charge
pub type ChargeResponse = ApiResponse<ChargeData>;

/// Reply to an OTP validation
pub type ValidateChargeResponse = ApiResponse<ValidationData>;

/// Charge record returned by the gateway; unknown fields land in `extra`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChargeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_auth: Option<String>,

    #[serde(rename = "flwRef", default, skip_serializing_if = "Option::is_none")]
    pub flw_ref: Option<String>,

    #[serde(rename = "txRef", default, skip_serializing_if = "Option::is_none")]
    pub tx_ref: Option<String>,

    #[serde(rename = "authModelUsed", default, skip_serializing_if = "Option::is_none")]
    pub auth_model_used: Option<String>,

    #[serde(rename = "authurl", default, skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,

    #[serde(rename = "chargeResponseCode", default, skip_serializing_if = "Option::is_none")]
    pub charge_response_code: Option<String>,

    #[serde(rename = "chargeResponseMessage", default, skip_serializing_if = "Option::is_none")]
    pub charge_response_message: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub charged_amount: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChargeData {
    /// Gateway asks for the charge to be resubmitted with the card PIN
    pub fn suggests_pin(&self) -> bool {
        self.suggested_auth
            .as_deref()
            .map(|auth| auth.eq_ignore_ascii_case(PIN_AUTH))
            .unwrap_or(false)
    }

    /// Charge is waiting for an OTP validation call
    pub fn needs_validation(&self) -> bool {
        self.charge_response_code.as_deref() == Some(PENDING_VALIDATION_CODE)
    }
}

/// OTP validation payload: card validations nest the charge under `tx`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx: Option<ChargeData>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
