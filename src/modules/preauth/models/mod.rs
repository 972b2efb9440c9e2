pub mod preauth;

pub use preauth::{CaptureRequest, PreauthAction, RefundOrVoidRequest};
