//! Rave Payment Gateway Client Library
//!
//! Typed access to the Rave card and bank-account charge API: encrypted
//! charges with PIN/OTP step-up, preauthorization, five-step transaction
//! verification, refunds, fee quotes, bank listing and inline-checkout
//! integrity checksums.
//!
//! ```no_run
//! use rave::{Currency, RaveClient, VerifyTransactionRequest};
//! use rust_decimal::Decimal;
//!
//! # async fn run() -> rave::Result<()> {
//! let client = RaveClient::from_env()?;
//! let verified = client
//!     .transactions()
//!     .verify_transaction(VerifyTransactionRequest::new(
//!         "FLW-MOCK-6f52518a2ecca2b6b090f9593eb390ce",
//!         Decimal::new(300, 0),
//!         Currency::NGN,
//!     ))
//!     .await?;
//! println!("charged {}", verified.charged_amount);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::client::{ApiResponse, RaveClient};
pub use crate::config::{Config, Environment, RaveConfig};
pub use crate::core::{Currency, RaveError, Result};
pub use crate::modules::banks::Bank;
pub use crate::modules::charges::{
    AccountChargeRequest, CardChargeRequest, ChargeData, ChargeResponse,
    ValidateAccountChargeRequest, ValidateCardChargeRequest,
};
pub use crate::modules::fees::FeeRequest;
pub use crate::modules::preauth::{CaptureRequest, PreauthAction, RefundOrVoidRequest};
pub use crate::modules::transactions::{
    RefundRequest, VerificationFailure, VerifiedTransaction, VerifyTransactionRequest,
    XrequeryRequest,
};
