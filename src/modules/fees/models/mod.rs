pub mod fee;

pub use fee::{FeeData, FeeRequest, FeeResponse};
