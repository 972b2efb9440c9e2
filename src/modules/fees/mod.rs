pub mod models;
pub mod services;

pub use models::{FeeData, FeeRequest, FeeResponse};
pub use services::FeeService;
