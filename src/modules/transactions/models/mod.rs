pub mod refund;
pub mod verification;

pub use refund::RefundRequest;
pub use verification::{
    Expectation, VerificationFailure, VerifiedTransaction, VerifyTransactionRequest,
    XrequeryRequest, SUCCESSFUL_CHARGE_CODES, TX_FETCHED_MESSAGE,
};
