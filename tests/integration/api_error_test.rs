// Integration tests for gateway error translation
//
// The envelope `status` field decides success; the HTTP status only feeds
// the error message.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use rave::{Currency, FeeRequest, RaveError};
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

const FEE_PATH: &str = "/flwv3-pug/getpaidx/api/fee";

fn fee_request() -> FeeRequest {
    FeeRequest::new(dec!(100), Currency::NGN)
}

#[tokio::test]
async fn test_error_envelope_becomes_api_error() {
    let server = start_mock_gateway().await;
    Mock::given(method("POST"))
        .and(path(FEE_PATH))
        .respond_with(failure(400, "cvv is required"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fees()
        .get_fees(fee_request())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "cvv is required Status Code: 400");
    assert_eq!(err.status_code(), Some(400));
}

#[tokio::test]
async fn test_error_envelope_with_http_200_is_still_an_error() {
    let server = start_mock_gateway().await;
    Mock::given(method("POST"))
        .and(path(FEE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "Invalid currency",
            "data": null
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fees()
        .get_fees(fee_request())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RaveError::Api { ref message, status_code: 200 } if message == "Invalid currency"
    ));
}

#[tokio::test]
async fn test_non_json_body_uses_reason_phrase() {
    let server = start_mock_gateway().await;
    Mock::given(method("POST"))
        .and(path(FEE_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fees()
        .get_fees(fee_request())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Bad Gateway Status Code: 502");
}

#[tokio::test]
async fn test_success_envelope_wins_over_http_status() {
    let server = start_mock_gateway().await;
    Mock::given(method("POST"))
        .and(path(FEE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "status": "success",
            "message": "Charge fee",
            "data": { "fee": 1.4 }
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .fees()
        .get_fees(fee_request())
        .await
        .unwrap();

    assert_eq!(response.data.fee, Some(dec!(1.4)));
}
