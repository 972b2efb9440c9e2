pub mod models;
pub mod services;

pub use models::{
    AccountChargeRequest, CardChargeRequest, ChargeData, ChargeResponse,
    ValidateAccountChargeRequest, ValidateCardChargeRequest, ValidateChargeResponse,
    ValidationData,
};
pub use services::{ChargeService, EncryptedCharge};
