use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies the gateway accepts for charges and fee lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Nigerian Naira
    NGN,
    /// US Dollar
    USD,
    /// Euro
    EUR,
    /// Pound Sterling
    GBP,
    /// Ghanaian Cedi
    GHS,
    /// Kenyan Shilling
    KES,
    /// South African Rand
    ZAR,
    /// Ugandan Shilling
    UGX,
    /// Tanzanian Shilling
    TZS,
}

impl Currency {
    /// ISO 4217 code as sent on the wire
    pub fn code(&self) -> &'static str {
        match self {
            Currency::NGN => "NGN",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::GHS => "GHS",
            Currency::KES => "KES",
            Currency::ZAR => "ZAR",
            Currency::UGX => "UGX",
            Currency::TZS => "TZS",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NGN" => Ok(Currency::NGN),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "GHS" => Ok(Currency::GHS),
            "KES" => Ok(Currency::KES),
            "ZAR" => Ok(Currency::ZAR),
            "UGX" => Ok(Currency::UGX),
            "TZS" => Ok(Currency::TZS),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}
