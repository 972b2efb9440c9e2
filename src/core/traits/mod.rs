pub mod validate;

pub use validate::{require, require_all, require_some, Validate};
