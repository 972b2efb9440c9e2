pub mod models;
pub mod services;

pub use models::Bank;
pub use services::BankService;
