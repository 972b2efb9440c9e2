use serde_json::Value;
use tracing::info;

use super::super::models::{CaptureRequest, RefundOrVoidRequest};
use crate::client::{endpoints, parse_response, with_credential, ApiResponse, RaveClient};
use crate::core::{Result, Validate};
use crate::modules::charges::{CardChargeRequest, ChargeResponse};

/// `charge_type` marking a card charge as a preauthorization
pub const PREAUTH_CHARGE_TYPE: &str = "preauth";

/// Two-phase card charges: reserve, then capture or release
pub struct PreauthService<'a> {
    client: &'a RaveClient,
}

impl<'a> PreauthService<'a> {
    pub(crate) fn new(client: &'a RaveClient) -> Self {
        Self { client }
    }

    /// Reserve funds on a card; same flow as a card charge, PIN step-up included
    pub async fn preauthorize_card(&self, request: CardChargeRequest) -> Result<ChargeResponse> {
        let mut request = request;
        request.charge_type = Some(PREAUTH_CHARGE_TYPE.to_string());

        self.client.charges().charge_card(request).await
    }

    /// Commit a preauthorized charge
    pub async fn capture(&self, request: CaptureRequest) -> Result<ApiResponse<Value>> {
        request.validate()?;

        info!(flw_ref = %request.flw_ref, "Capturing preauthorized charge");

        let body = with_credential("SECKEY", self.client.secret_key(), &request)?;
        let value = self.client.post_json(endpoints::CAPTURE, &body).await?;
        parse_response(value)
    }

    /// Refund a captured amount or void an uncaptured hold
    pub async fn refund_or_void(&self, request: RefundOrVoidRequest) -> Result<ApiResponse<Value>> {
        request.validate()?;

        info!(
            flw_ref = %request.reference,
            action = %request.action,
            "Refunding or voiding preauthorized charge"
        );

        let body = with_credential("SECKEY", self.client.secret_key(), &request)?;
        let value = self.client.post_json(endpoints::REFUND_OR_VOID, &body).await?;
        parse_response(value)
    }
}
