pub mod models;
pub mod services;

pub use models::{
    RefundRequest, VerificationFailure, VerifiedTransaction, VerifyTransactionRequest,
    XrequeryRequest,
};
pub use services::TransactionService;
