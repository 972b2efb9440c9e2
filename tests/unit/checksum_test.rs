// Property-based tests for the inline checkout integrity checksum

use proptest::prelude::*;
use rave::core::checksum::{integrity_checksum, integrity_checksum_for};
use rave::RaveError;
use serde::Serialize;
use serde_json::{json, Map, Value};
use sha2::{Digest, Sha256};

const SECRET_KEY: &str = "FLWSECK-bb971402072265fb156e90a3578fe5e6-X";

#[derive(Serialize)]
struct InlinePayload {
    #[serde(rename = "PBFPubKey")]
    public_key: &'static str,
    amount: u32,
    currency: &'static str,
    txref: &'static str,
}

proptest! {
    #[test]
    fn test_checksum_ignores_insertion_order(
        entries in prop::collection::btree_map("[a-zA-Z_]{1,12}", "[ -~]{0,24}", 1..12)
    ) {
        let forward: Map<String, Value> = entries
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        let reversed: Map<String, Value> = entries
            .iter()
            .rev()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();

        prop_assert_eq!(
            integrity_checksum(&forward, SECRET_KEY),
            integrity_checksum(&reversed, SECRET_KEY)
        );
    }

    #[test]
    fn test_checksum_is_sha256_of_sorted_values(
        entries in prop::collection::btree_map("[a-z]{1,8}", "[a-z0-9]{0,16}", 1..8)
    ) {
        let map: Map<String, Value> = entries
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();

        // BTreeMap iterates in byte order of its keys
        let mut input: String = entries.values().cloned().collect();
        input.push_str(SECRET_KEY);
        let expected = hex::encode(Sha256::digest(input.as_bytes()));

        prop_assert_eq!(integrity_checksum(&map, SECRET_KEY), expected);
    }

    #[test]
    fn test_checksum_is_lowercase_hex(value in "[ -~]{0,32}") {
        let map = json!({ "txref": value });
        let checksum = integrity_checksum(map.as_object().unwrap(), SECRET_KEY);

        prop_assert_eq!(checksum.len(), 64);
        prop_assert!(checksum.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

#[test]
fn test_known_checkout_checksum() {
    let payload = json!({
        "PBFPubKey": "FLWPUBK-e634d14d9ded04eaf05d5b63a0a06d2f-X",
        "amount": 20,
        "payment_method": "both",
        "custom_description": "Pay Internet",
        "custom_logo": "http://localhost/payporte-3/skin/frontend/ultimo/shoppy/custom/images/logo.svg",
        "custom_title": "Shoppy Global systems",
        "country": "NG",
        "currency": "NGN",
        "customer_email": "user@example.com",
        "customer_firstname": "Temi",
        "customer_lastname": "Adelewa",
        "customer_phone": "234099940409",
        "txref": "MG-1500041286295"
    });

    assert_eq!(
        integrity_checksum_for(&payload, SECRET_KEY).unwrap(),
        "a14ac4eba0902e8fd6b5fdf542f46d6efc18885a63c3d5f100c26715c7c8d8f4"
    );
}

#[test]
fn test_typed_payload_matches_json_payload() {
    let typed = InlinePayload {
        public_key: "FLWPUBK-e634d14d9ded04eaf05d5b63a0a06d2f-X",
        amount: 20,
        currency: "NGN",
        txref: "MG-1500041286295",
    };
    let untyped = json!({
        "txref": "MG-1500041286295",
        "currency": "NGN",
        "amount": 20,
        "PBFPubKey": "FLWPUBK-e634d14d9ded04eaf05d5b63a0a06d2f-X"
    });

    assert_eq!(
        integrity_checksum_for(&typed, SECRET_KEY).unwrap(),
        integrity_checksum_for(&untyped, SECRET_KEY).unwrap()
    );
}

#[test]
fn test_non_object_payload_is_invalid() {
    let result = integrity_checksum_for(&"just a string", SECRET_KEY);
    assert!(matches!(result, Err(RaveError::InvalidPayload(_))));
}
