use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::traits::require;
use crate::core::{Result, Validate};

/// Refund a completed direct charge, fully or partially
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundRequest {
    #[serde(rename = "ref")]
    pub reference: String,

    /// Partial refund amount; omitted for a full refund
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

impl RefundRequest {
    pub fn full(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            amount: None,
        }
    }

    pub fn partial(reference: impl Into<String>, amount: Decimal) -> Self {
        Self {
            reference: reference.into(),
            amount: Some(amount),
        }
    }
}

impl Validate for RefundRequest {
    fn validate(&self) -> Result<()> {
        require("ref", &self.reference)
    }
}
