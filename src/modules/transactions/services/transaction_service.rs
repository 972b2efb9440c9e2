use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use super::super::models::{
    Expectation, RefundRequest, VerifiedTransaction, VerifyTransactionRequest, XrequeryRequest,
};
use super::verification::verify_response;
use crate::client::{endpoints, parse_response, with_credential, ApiResponse, RaveClient};
use crate::core::{Result, Validate};

/// Verification and refunds of existing transactions
pub struct TransactionService<'a> {
    client: &'a RaveClient,
}

impl<'a> TransactionService<'a> {
    pub(crate) fn new(client: &'a RaveClient) -> Self {
        Self { client }
    }

    /// Fetch a transaction via the verify endpoint and run five-step verification
    ///
    /// # Errors
    /// * `Api` - the gateway could not fetch the transaction
    /// * `Verification` - the stored record does not match the expectation
    pub async fn verify_transaction(
        &self,
        request: VerifyTransactionRequest,
    ) -> Result<VerifiedTransaction> {
        request.validate()?;
        self.fetch_and_verify(endpoints::VERIFY, &request, request.expectation())
            .await
    }

    /// Same as [`verify_transaction`](Self::verify_transaction), through xrequery
    pub async fn xrequery_transaction_verification(
        &self,
        request: XrequeryRequest,
    ) -> Result<VerifiedTransaction> {
        request.validate()?;
        self.fetch_and_verify(endpoints::XREQUERY, &request, request.expectation())
            .await
    }

    /// Refund a completed direct charge
    pub async fn refund_transaction(&self, request: RefundRequest) -> Result<ApiResponse<Value>> {
        request.validate()?;

        info!(flw_ref = %request.reference, "Refunding transaction");

        // This endpoint takes the secret key in lowercase
        let body = with_credential("seckey", self.client.secret_key(), &request)?;
        let value = self.client.post_json(endpoints::REFUND, &body).await?;
        parse_response(value)
    }

    async fn fetch_and_verify<T: Serialize>(
        &self,
        endpoint: &str,
        request: &T,
        expected: Expectation<'_>,
    ) -> Result<VerifiedTransaction> {
        info!(
            endpoint = %endpoint,
            flw_ref = %expected.flw_ref,
            "Verifying transaction"
        );

        let body = with_credential("SECKEY", self.client.secret_key(), request)?;
        let response = self.client.post_json(endpoint, &body).await?;

        match verify_response(&expected, response) {
            Ok(verified) => {
                info!(
                    flw_ref = %verified.flw_ref,
                    charged_amount = %verified.charged_amount,
                    "Transaction verified"
                );
                Ok(verified)
            }
            Err(failure) => {
                error!(
                    flw_ref = %expected.flw_ref,
                    reason = %failure,
                    "Transaction verification failed"
                );
                Err(failure.into())
            }
        }
    }
}
