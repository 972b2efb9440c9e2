use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::traits::require;
use crate::core::{Result, Validate};

/// Settle a preauthorized charge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureRequest {
    #[serde(rename = "flwRef")]
    pub flw_ref: String,
}

impl CaptureRequest {
    pub fn new(flw_ref: impl Into<String>) -> Self {
        Self {
            flw_ref: flw_ref.into(),
        }
    }
}

impl Validate for CaptureRequest {
    fn validate(&self) -> Result<()> {
        require("flwRef", &self.flw_ref)
    }
}

/// What to do with a preauthorized amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreauthAction {
    /// Return a captured amount to the customer
    Refund,
    /// Release a hold that was never captured
    Void,
}

impl fmt::Display for PreauthAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreauthAction::Refund => write!(f, "refund"),
            PreauthAction::Void => write!(f, "void"),
        }
    }
}

/// Refund or void a preauthorized charge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundOrVoidRequest {
    #[serde(rename = "ref")]
    pub reference: String,

    pub action: PreauthAction,
}

impl RefundOrVoidRequest {
    pub fn refund(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            action: PreauthAction::Refund,
        }
    }

    pub fn void(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            action: PreauthAction::Void,
        }
    }
}

impl Validate for RefundOrVoidRequest {
    fn validate(&self) -> Result<()> {
        require("ref", &self.reference)
    }
}
