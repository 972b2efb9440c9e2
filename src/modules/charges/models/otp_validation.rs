use serde::{Deserialize, Serialize};

use crate::core::traits::require_all;
use crate::core::{Result, Validate};

/// OTP confirmation for a pending card charge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateCardChargeRequest {
    /// `flwRef` returned by the charge call
    pub transaction_reference: String,
    pub otp: String,
}

/// OTP confirmation for a pending account charge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateAccountChargeRequest {
    #[serde(rename = "transactionreference")]
    pub transaction_reference: String,
    pub otp: String,
}

impl ValidateCardChargeRequest {
    pub fn new(transaction_reference: impl Into<String>, otp: impl Into<String>) -> Self {
        Self {
            transaction_reference: transaction_reference.into(),
            otp: otp.into(),
        }
    }
}

impl ValidateAccountChargeRequest {
    pub fn new(transaction_reference: impl Into<String>, otp: impl Into<String>) -> Self {
        Self {
            transaction_reference: transaction_reference.into(),
            otp: otp.into(),
        }
    }
}

impl Validate for ValidateCardChargeRequest {
    fn validate(&self) -> Result<()> {
        require_all(&[
            ("transaction_reference", self.transaction_reference.as_str()),
            ("otp", self.otp.as_str()),
        ])
    }
}

impl Validate for ValidateAccountChargeRequest {
    fn validate(&self) -> Result<()> {
        require_all(&[
            ("transactionreference", self.transaction_reference.as_str()),
            ("otp", self.otp.as_str()),
        ])
    }
}
