use serde::{Deserialize, Serialize};

/// A bank that can be debited through account charges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    #[serde(rename = "bankname")]
    pub name: String,

    /// Value for `accountbank` in an account charge
    #[serde(rename = "bankcode")]
    pub code: String,

    #[serde(rename = "internetbanking", default)]
    pub internet_banking: bool,
}
