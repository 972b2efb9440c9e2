use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::ApiResponse;
use crate::core::amount::deserialize_optional_amount;
use crate::core::{Currency, RaveError, Result, Validate};

/// Fee quote for an amount in a currency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeRequest {
    pub amount: Decimal,
    pub currency: Currency,
}

impl FeeRequest {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

impl Validate for FeeRequest {
    fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(RaveError::InvalidPayload(
                "amount must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

pub type FeeResponse = ApiResponse<FeeData>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeeData {
    /// Amount plus fees, as the customer will be charged
    #[serde(
        default,
        deserialize_with = "deserialize_optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub charge_amount: Option<Decimal>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee: Option<Decimal>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub merchantfee: Option<Decimal>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub ravefee: Option<Decimal>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
