// Integration tests for transaction verification and refunds
//
// Exercises the verify and xrequery endpoints end to end, including the
// five-step comparison of the gateway record against the caller's record.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use rave::{
    Currency, RaveError, RefundRequest, VerificationFailure, VerifyTransactionRequest,
    XrequeryRequest,
};
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::Mock;

const FLW_REF: &str = "FLW-MOCK-6f52518a2ecca2b6b090f9593eb390ce";

fn verify_data(charged_amount: u32, charge_response: &str) -> serde_json::Value {
    json!({
        "flw_ref": FLW_REF,
        "transaction_currency": "NGN",
        "charged_amount": charged_amount,
        "flwMeta": { "chargeResponse": charge_response }
    })
}

#[tokio::test]
async fn test_verify_transaction_succeeds() {
    let server = start_mock_gateway().await;
    Mock::given(method("POST"))
        .and(path("/flwv3-pug/getpaidx/api/verify"))
        .and(body_partial_json(json!({
            "flw_ref": FLW_REF,
            "SECKEY": TEST_SECRET_KEY,
            "normalize": "1"
        })))
        .respond_with(success("Tx Fetched", verify_data(300, "00")))
        .expect(1)
        .mount(&server)
        .await;

    let verified = client_for(&server)
        .transactions()
        .verify_transaction(VerifyTransactionRequest::new(FLW_REF, dec!(300), Currency::NGN))
        .await
        .unwrap();

    assert_eq!(verified.flw_ref, FLW_REF);
    assert_eq!(verified.charged_amount, dec!(300));
    assert_eq!(verified.response["status"], "success");
}

#[tokio::test]
async fn test_verify_transaction_rejects_underpayment() {
    let server = start_mock_gateway().await;
    Mock::given(method("POST"))
        .and(path("/flwv3-pug/getpaidx/api/verify"))
        .respond_with(success("Tx Fetched", verify_data(300, "00")))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .transactions()
        .verify_transaction(VerifyTransactionRequest::new(FLW_REF, dec!(1000), Currency::NGN))
        .await
        .unwrap_err();

    match err {
        RaveError::Verification(VerificationFailure::AmountTooLow { expected, charged }) => {
            assert_eq!(expected, dec!(1000));
            assert_eq!(charged, dec!(300));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_verify_transaction_rejects_failed_charge() {
    let server = start_mock_gateway().await;
    Mock::given(method("POST"))
        .and(path("/flwv3-pug/getpaidx/api/verify"))
        .respond_with(success("Tx Fetched", verify_data(300, "RR")))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .transactions()
        .verify_transaction(VerifyTransactionRequest::new(FLW_REF, dec!(300), Currency::NGN))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RaveError::Verification(VerificationFailure::ChargeNotSuccessful(code)) if code == "RR"
    ));
}

#[tokio::test]
async fn test_verify_transaction_rejects_currency_mismatch() {
    let server = start_mock_gateway().await;
    Mock::given(method("POST"))
        .and(path("/flwv3-pug/getpaidx/api/verify"))
        .respond_with(success("Tx Fetched", verify_data(300, "00")))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .transactions()
        .verify_transaction(VerifyTransactionRequest::new(FLW_REF, dec!(300), Currency::USD))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RaveError::Verification(VerificationFailure::CurrencyMismatch { .. })
    ));
}

#[tokio::test]
async fn test_xrequery_verification_uses_flat_fields() {
    let server = start_mock_gateway().await;
    Mock::given(method("POST"))
        .and(path("/flwv3-pug/getpaidx/api/xrequery"))
        .and(body_partial_json(json!({
            "flw_ref": FLW_REF,
            "tx_ref": "abcdef",
            "last_attempt": "1",
            "only_attempt": "1",
            "SECKEY": TEST_SECRET_KEY
        })))
        .respond_with(success(
            "Tx Fetched",
            json!({
                "flwref": FLW_REF,
                "currency": "NGN",
                "chargedamount": 5300,
                "chargecode": "00"
            }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let request = XrequeryRequest::new(FLW_REF, dec!(5300), Currency::NGN)
        .with_tx_ref("abcdef")
        .last_attempt_only();

    let verified = client_for(&server)
        .transactions()
        .xrequery_transaction_verification(request)
        .await
        .unwrap();

    assert_eq!(verified.charge_code, "00");
    assert_eq!(verified.currency, "NGN");
}

#[tokio::test]
async fn test_verification_gateway_error_is_api_error() {
    let server = start_mock_gateway().await;
    Mock::given(method("POST"))
        .and(path("/flwv3-pug/getpaidx/api/verify"))
        .respond_with(failure(400, "Transaction not found"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .transactions()
        .verify_transaction(VerifyTransactionRequest::new(FLW_REF, dec!(300), Currency::NGN))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Transaction not found Status Code: 400");
}

#[tokio::test]
async fn test_refund_transaction_uses_lowercase_seckey() {
    let server = start_mock_gateway().await;
    Mock::given(method("POST"))
        .and(path("/gpx/merchant/transactions/refund"))
        .and(body_json(json!({
            "ref": FLW_REF,
            "amount": "150",
            "seckey": TEST_SECRET_KEY
        })))
        .respond_with(success("Refunded", json!({ "status": "completed" })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .transactions()
        .refund_transaction(RefundRequest::partial(FLW_REF, dec!(150)))
        .await
        .unwrap();

    assert_eq!(response.message, "Refunded");
}
