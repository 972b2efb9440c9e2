pub mod account_charge;
pub mod card_charge;
pub mod charge_response;
pub mod otp_validation;

pub use account_charge::{AccountChargeRequest, ACCOUNT_PAYMENT_TYPE};
pub use card_charge::{CardChargeRequest, PIN_AUTH};
pub use charge_response::{ChargeData, ChargeResponse, ValidateChargeResponse, ValidationData};
pub use otp_validation::{ValidateAccountChargeRequest, ValidateCardChargeRequest};
