// Integration tests for fee quotes and bank listing

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use rave::{Currency, FeeRequest, RaveError};
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_get_fees_sends_public_key() {
    let server = start_mock_gateway().await;
    Mock::given(method("POST"))
        .and(path("/flwv3-pug/getpaidx/api/fee"))
        .and(body_json(json!({
            "amount": "5300",
            "currency": "NGN",
            "PBFPubKey": TEST_PUBLIC_KEY
        })))
        .respond_with(success(
            "Charge fee",
            json!({
                "charge_amount": "5374.2",
                "fee": 74.2,
                "merchantfee": "0",
                "ravefee": "74.2"
            }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .fees()
        .get_fees(FeeRequest::new(dec!(5300), Currency::NGN))
        .await
        .unwrap();

    assert!(response.is_success());
    assert_eq!(response.data.charge_amount, Some(dec!(5374.2)));
    assert_eq!(response.data.fee, Some(dec!(74.2)));
    assert_eq!(response.data.merchantfee, Some(dec!(0)));
}

#[tokio::test]
async fn test_get_fees_rejects_zero_amount() {
    let server = start_mock_gateway().await;

    let err = client_for(&server)
        .fees()
        .get_fees(FeeRequest::new(dec!(0), Currency::NGN))
        .await
        .unwrap_err();

    assert!(matches!(err, RaveError::InvalidPayload(_)));
    assert!(received_bodies(&server).await.is_empty());
}

#[tokio::test]
async fn test_list_banks_reads_bare_array() {
    let server = start_mock_gateway().await;
    Mock::given(method("GET"))
        .and(path("/flwv3-pug/getpaidx/api/flwpbf-banks.js"))
        .and(query_param("json", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "bankname": "ACCESS BANK NIGERIA", "bankcode": "044", "internetbanking": false },
            { "bankname": "GTBANK PLC", "bankcode": "058", "internetbanking": true }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let banks = client_for(&server).banks().list_banks().await.unwrap();

    assert_eq!(banks.len(), 2);
    assert_eq!(banks[0].name, "ACCESS BANK NIGERIA");
    assert_eq!(banks[0].code, "044");
    assert!(banks[1].internet_banking);
}

#[tokio::test]
async fn test_list_banks_http_error_is_api_error() {
    let server = start_mock_gateway().await;
    Mock::given(method("GET"))
        .and(path("/flwv3-pug/getpaidx/api/flwpbf-banks.js"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).banks().list_banks().await.unwrap_err();

    assert_eq!(err.status_code(), Some(503));
    assert!(matches!(err, RaveError::Api { .. }));
}
