//! HTTP plumbing shared by every endpoint.
//!
//! All gateway calls funnel through [`RaveClient::post_json`] or
//! [`RaveClient::get_json`]. Enveloped responses are accepted only when the
//! body's `status` field reads `"success"`; anything else becomes
//! [`RaveError::Api`] carrying the gateway message and HTTP status.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{error, info};

use crate::config::{Config, RaveConfig};
use crate::core::checksum::integrity_checksum_for;
use crate::core::encryption::{derive_encryption_key, encrypt_3des};
use crate::core::{RaveError, Result};
use crate::modules::banks::BankService;
use crate::modules::charges::ChargeService;
use crate::modules::fees::FeeService;
use crate::modules::preauth::PreauthService;
use crate::modules::transactions::TransactionService;

/// Value of the envelope `status` field on success
pub const SUCCESS_STATUS: &str = "success";

/// Fixed endpoint paths, relative to the environment base URL
pub mod endpoints {
    pub const CHARGE: &str = "/flwv3-pug/getpaidx/api/charge";
    pub const VALIDATE_CARD_CHARGE: &str = "/flwv3-pug/getpaidx/api/validatecharge";
    pub const VALIDATE_ACCOUNT_CHARGE: &str = "/flwv3-pug/getpaidx/api/validate";
    pub const CAPTURE: &str = "/flwv3-pug/getpaidx/api/capture";
    pub const REFUND_OR_VOID: &str = "/flwv3-pug/getpaidx/api/refundorvoid";
    pub const VERIFY: &str = "/flwv3-pug/getpaidx/api/verify";
    pub const XREQUERY: &str = "/flwv3-pug/getpaidx/api/xrequery";
    pub const FEE: &str = "/flwv3-pug/getpaidx/api/fee";
    pub const LIST_BANKS: &str = "/flwv3-pug/getpaidx/api/flwpbf-banks.js?json=1";
    pub const REFUND: &str = "/gpx/merchant/transactions/refund";
}

/// Standard `{status, message, data}` envelope returned by the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct ApiResponse<T> {
    pub status: String,

    #[serde(default)]
    pub message: String,

    /// `null` or absent `data` decodes as `T::default()`
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

/// Gateway client bound to one merchant account
#[derive(Debug, Clone)]
pub struct RaveClient {
    http: Client,
    config: RaveConfig,
    encryption_key: String,
}

impl RaveClient {
    /// Create a new client
    ///
    /// # Errors
    /// * `Configuration` - if the keys or timeout are invalid
    /// * `Http` - if the underlying HTTP client cannot be built
    pub fn new(config: RaveConfig) -> Result<Self> {
        config.validate()?;
        let encryption_key = derive_encryption_key(&config.secret_key)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            config,
            encryption_key,
        })
    }

    /// Create a client from `RAVE_*` environment variables
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        Self::new(config.rave)
    }

    pub fn config(&self) -> &RaveConfig {
        &self.config
    }

    pub fn public_key(&self) -> &str {
        &self.config.public_key
    }

    pub fn secret_key(&self) -> &str {
        &self.config.secret_key
    }

    /// 24-byte 3DES key derived from the secret key
    pub fn encryption_key(&self) -> &str {
        &self.encryption_key
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub fn charges(&self) -> ChargeService<'_> {
        ChargeService::new(self)
    }

    pub fn preauth(&self) -> PreauthService<'_> {
        PreauthService::new(self)
    }

    pub fn transactions(&self) -> TransactionService<'_> {
        TransactionService::new(self)
    }

    pub fn fees(&self) -> FeeService<'_> {
        FeeService::new(self)
    }

    pub fn banks(&self) -> BankService<'_> {
        BankService::new(self)
    }

    /// Encrypt a payload with this account's derived key
    pub fn encrypt_3des(&self, payload: &str) -> Result<String> {
        encrypt_3des(&self.encryption_key, payload)
    }

    /// Integrity checksum for inline checkout payloads, keyed with this account's secret
    pub fn calculate_integrity_checksum<T: Serialize>(&self, payload: &T) -> Result<String> {
        integrity_checksum_for(payload, &self.config.secret_key)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// POST a JSON body and return the enveloped response on gateway success
    pub(crate) async fn post_json<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        info!(endpoint = %path, "Sending gateway request");

        let response = self
            .http
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status_code = response.status();
        let body = response.text().await?;

        match handle_api_errors(status_code, &body) {
            Ok(value) => {
                info!(
                    endpoint = %path,
                    status_code = status_code.as_u16(),
                    "Gateway request succeeded"
                );
                Ok(value)
            }
            Err(e) => {
                error!(
                    endpoint = %path,
                    status_code = status_code.as_u16(),
                    error = %e,
                    "Gateway request failed"
                );
                Err(e)
            }
        }
    }

    /// GET an un-enveloped JSON document
    pub(crate) async fn get_json(&self, path: &str) -> Result<Value> {
        info!(endpoint = %path, "Sending gateway request");

        let response = self.http.get(self.url(path)).send().await?;
        let status_code = response.status();
        let body = response.text().await?;

        if !status_code.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| reason_phrase(status_code));
            error!(
                endpoint = %path,
                status_code = status_code.as_u16(),
                "Gateway request failed"
            );
            return Err(RaveError::api(message, status_code.as_u16()));
        }

        serde_json::from_str(&body).map_err(|e| {
            RaveError::invalid_response(format!("{} returned invalid JSON: {}", path, e))
        })
    }
}

/// Map a raw gateway reply onto success or [`RaveError::Api`].
///
/// The envelope `status` decides, not the HTTP status code.
pub fn handle_api_errors(status_code: StatusCode, body: &str) -> Result<Value> {
    let parsed = serde_json::from_str::<Value>(body).ok();

    match parsed {
        Some(value) if value.get("status").and_then(Value::as_str) == Some(SUCCESS_STATUS) => {
            Ok(value)
        }
        other => {
            let message = other
                .as_ref()
                .and_then(|v| v.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| reason_phrase(status_code));
            Err(RaveError::api(message, status_code.as_u16()))
        }
    }
}

/// Decode a successful envelope into its typed form
pub(crate) fn parse_response<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| RaveError::invalid_response(e.to_string()))
}

/// Serialize `payload` to an object and add a credential field to it
pub(crate) fn with_credential<T: Serialize>(name: &str, key: &str, payload: &T) -> Result<Value> {
    match serde_json::to_value(payload)? {
        Value::Object(mut map) => {
            map.insert(name.to_string(), Value::String(key.to_string()));
            Ok(Value::Object(map))
        }
        _ => Err(RaveError::InvalidPayload(
            "request payload must serialize to a JSON object".to_string(),
        )),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn reason_phrase(status_code: StatusCode) -> String {
    status_code
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}
