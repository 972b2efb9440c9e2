use crate::core::{RaveError, Result};

/// Client-side parameter check run before any request leaves the process
pub trait Validate {
    /// Return the first missing required parameter, by its wire name
    fn validate(&self) -> Result<()>;
}

/// Fail with `MissingParameter(name)` when `value` is empty or whitespace
pub fn require(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RaveError::missing(name));
    }
    Ok(())
}

/// Like [`require`] for optional fields
pub fn require_some(name: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) => require(name, v),
        None => Err(RaveError::missing(name)),
    }
}

/// Check a list of `(wire name, value)` pairs in order
pub fn require_all(fields: &[(&str, &str)]) -> Result<()> {
    fields
        .iter()
        .try_for_each(|(name, value)| require(name, value))
}
