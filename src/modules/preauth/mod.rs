pub mod models;
pub mod services;

pub use models::{CaptureRequest, PreauthAction, RefundOrVoidRequest};
pub use services::PreauthService;
