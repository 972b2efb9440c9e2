pub mod amount;
pub mod checksum;
pub mod currency;
pub mod encryption;
pub mod error;
pub mod traits;

pub use currency::Currency;
pub use error::{RaveError, Result, VerificationFailure};
pub use traits::Validate;
