pub mod transaction_service;
pub mod verification;

pub use transaction_service::TransactionService;
pub use verification::{verify_record, verify_response, GatewayRecord};
