pub mod preauth_service;

pub use preauth_service::{PreauthService, PREAUTH_CHARGE_TYPE};
