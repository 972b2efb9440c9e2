//! Five-step verification of a gateway transaction record.
//!
//! The verify and xrequery endpoints describe the same transaction with
//! different field names. Verify nests the charge code under `flwMeta`;
//! xrequery flattens it and may return a list of attempts.

use rust_decimal::Decimal;
use serde_json::Value;

use super::super::models::{
    Expectation, VerificationFailure, VerifiedTransaction, SUCCESSFUL_CHARGE_CODES,
    TX_FETCHED_MESSAGE,
};
use crate::core::amount::parse_amount;

/// Fields of a gateway transaction record that verification looks at
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GatewayRecord {
    pub message: String,
    pub flw_ref: Option<String>,
    pub charge_code: Option<String>,
    pub currency: Option<String>,
    pub charged_amount: Option<Decimal>,
}

impl GatewayRecord {
    /// Pull the verification fields out of a verify or xrequery reply
    pub fn from_response(response: &Value) -> Self {
        let message = string_field(response, "message").unwrap_or_default();

        let data = match response.get("data") {
            Some(Value::Array(attempts)) => attempts.last(),
            other => other,
        };
        let data = data.unwrap_or(&Value::Null);

        let flw_ref = string_field(data, "flw_ref").or_else(|| string_field(data, "flwref"));

        let (charge_code, currency, charged_amount) =
            match data.get("flwMeta").filter(|meta| meta.is_object()) {
                Some(meta) => (
                    string_field(meta, "chargeResponse"),
                    string_field(data, "transaction_currency"),
                    data.get("charged_amount").and_then(parse_amount),
                ),
                None => (
                    string_field(data, "chargecode"),
                    string_field(data, "currency"),
                    data.get("chargedamount").and_then(parse_amount),
                ),
            };

        Self {
            message,
            flw_ref,
            charge_code,
            currency,
            charged_amount,
        }
    }
}

/// Run the five checks in order and stop at the first failure
pub fn verify_record(
    expected: &Expectation<'_>,
    record: &GatewayRecord,
) -> Result<(), VerificationFailure> {
    verify_transaction_reference(record.flw_ref.as_deref(), expected.flw_ref)?;
    verify_success_message(&record.message)?;
    verify_charge_response(record.charge_code.as_deref())?;
    verify_currency_code(record.currency.as_deref(), expected.currency.code())?;
    verify_charged_amount(record.charged_amount, expected.amount)
}

/// Verify a raw gateway reply against what the merchant expects
pub fn verify_response(
    expected: &Expectation<'_>,
    response: Value,
) -> Result<VerifiedTransaction, VerificationFailure> {
    let record = GatewayRecord::from_response(&response);
    verify_record(expected, &record)?;

    Ok(VerifiedTransaction {
        flw_ref: record.flw_ref.unwrap_or_default(),
        charge_code: record.charge_code.unwrap_or_default(),
        currency: record.currency.unwrap_or_default(),
        charged_amount: record.charged_amount.unwrap_or_default(),
        response,
    })
}

fn verify_transaction_reference(
    actual: Option<&str>,
    expected: &str,
) -> Result<(), VerificationFailure> {
    match actual {
        Some(actual) if actual == expected => Ok(()),
        actual => Err(VerificationFailure::ReferenceMismatch {
            expected: expected.to_string(),
            actual: actual.unwrap_or_default().to_string(),
        }),
    }
}

fn verify_success_message(message: &str) -> Result<(), VerificationFailure> {
    if message != TX_FETCHED_MESSAGE {
        return Err(VerificationFailure::UnexpectedMessage(message.to_string()));
    }
    Ok(())
}

fn verify_charge_response(charge_code: Option<&str>) -> Result<(), VerificationFailure> {
    match charge_code {
        Some(code) if SUCCESSFUL_CHARGE_CODES.contains(&code) => Ok(()),
        code => Err(VerificationFailure::ChargeNotSuccessful(
            code.unwrap_or_default().to_string(),
        )),
    }
}

fn verify_currency_code(actual: Option<&str>, expected: &str) -> Result<(), VerificationFailure> {
    match actual {
        Some(actual) if actual == expected => Ok(()),
        actual => Err(VerificationFailure::CurrencyMismatch {
            expected: expected.to_string(),
            actual: actual.unwrap_or_default().to_string(),
        }),
    }
}

// Charged amount must cover the amount to be paid
fn verify_charged_amount(
    charged: Option<Decimal>,
    expected: Decimal,
) -> Result<(), VerificationFailure> {
    let charged = charged.unwrap_or(Decimal::ZERO);
    if charged < expected {
        return Err(VerificationFailure::AmountTooLow { expected, charged });
    }
    Ok(())
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
