use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::super::models::{
    AccountChargeRequest, CardChargeRequest, ChargeResponse, ValidateAccountChargeRequest,
    ValidateCardChargeRequest, ValidateChargeResponse, PIN_AUTH,
};
use crate::client::{endpoints, parse_response, with_credential, RaveClient};
use crate::core::encryption::encrypt_3des;
use crate::core::traits::require_some;
use crate::core::{Result, Validate};

/// Algorithm tag sent alongside encrypted charge payloads
pub const ENCRYPTION_ALGORITHM: &str = "3DES-24";

/// Encrypted envelope posted to the charge endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedCharge {
    #[serde(rename = "PBFPubKey")]
    pub public_key: String,

    /// Base64 3DES ciphertext of the JSON charge parameters
    pub client: String,

    pub alg: String,
}

/// Card and bank-account charges
pub struct ChargeService<'a> {
    client: &'a RaveClient,
}

impl<'a> ChargeService<'a> {
    pub(crate) fn new(client: &'a RaveClient) -> Self {
        Self { client }
    }

    /// Charge a card, following a single PIN step-up when the gateway asks for it
    ///
    /// # Errors
    /// * `MissingParameter` - a required field is empty, or the gateway wants a PIN and none was given
    /// * `Api` - the gateway rejected the charge
    pub async fn charge_card(&self, request: CardChargeRequest) -> Result<ChargeResponse> {
        request.validate()?;

        info!(
            tx_ref = %request.tx_ref,
            amount = %request.amount,
            "Charging card"
        );

        let response = self.submit_charge(&request).await?;
        if !response.data.suggests_pin() {
            return Ok(response);
        }

        warn!(tx_ref = %request.tx_ref, "Gateway requested PIN authentication");

        let mut request = request;
        if request.suggested_auth.is_none() || request.uses_pin_auth() {
            request.suggested_auth = Some(PIN_AUTH.to_string());
        }
        require_some("pin", request.pin.as_deref())?;

        // Resubmitted once; a second suggestion goes back to the caller
        self.submit_charge(&request).await
    }

    /// Charge a Nigerian or South African bank account
    pub async fn charge_account(&self, request: AccountChargeRequest) -> Result<ChargeResponse> {
        request.validate()?;

        info!(
            tx_ref = %request.tx_ref,
            amount = %request.amount,
            account_bank = %request.account_bank,
            "Charging bank account"
        );

        self.submit_charge(&request).await
    }

    /// Validate a pending card charge with the OTP sent to the customer
    pub async fn validate_card_charge(
        &self,
        request: ValidateCardChargeRequest,
    ) -> Result<ValidateChargeResponse> {
        request.validate()?;

        info!(
            flw_ref = %request.transaction_reference,
            "Validating card charge"
        );

        let body = with_credential("PBFPubKey", self.client.public_key(), &request)?;
        let value = self
            .client
            .post_json(endpoints::VALIDATE_CARD_CHARGE, &body)
            .await?;
        parse_response(value)
    }

    /// Validate a pending account charge with the OTP sent to the customer
    pub async fn validate_account_charge(
        &self,
        request: ValidateAccountChargeRequest,
    ) -> Result<ValidateChargeResponse> {
        request.validate()?;

        info!(
            flw_ref = %request.transaction_reference,
            "Validating account charge"
        );

        let body = with_credential("PBFPubKey", self.client.public_key(), &request)?;
        let value = self
            .client
            .post_json(endpoints::VALIDATE_ACCOUNT_CHARGE, &body)
            .await?;
        parse_response(value)
    }

    /// Encrypt charge parameters into the envelope the charge endpoint expects
    pub fn set_up_charge<T: Serialize>(&self, charge: &T) -> Result<EncryptedCharge> {
        let payload = serde_json::to_string(charge)?;

        Ok(EncryptedCharge {
            public_key: self.client.public_key().to_string(),
            client: encrypt_3des(self.client.encryption_key(), &payload)?,
            alg: ENCRYPTION_ALGORITHM.to_string(),
        })
    }

    async fn submit_charge<T: Serialize>(&self, charge: &T) -> Result<ChargeResponse> {
        let envelope = self.set_up_charge(charge)?;
        let value = self.client.post_json(endpoints::CHARGE, &envelope).await?;
        parse_response(value)
    }
}
