use tracing::info;

use super::super::models::{FeeRequest, FeeResponse};
use crate::client::{endpoints, parse_response, with_credential, RaveClient};
use crate::core::{Result, Validate};

/// Fee lookups
pub struct FeeService<'a> {
    client: &'a RaveClient,
}

impl<'a> FeeService<'a> {
    pub(crate) fn new(client: &'a RaveClient) -> Self {
        Self { client }
    }

    /// Fees the gateway will add to a charge of `amount`
    pub async fn get_fees(&self, request: FeeRequest) -> Result<FeeResponse> {
        request.validate()?;

        info!(
            amount = %request.amount,
            currency = %request.currency,
            "Fetching fees"
        );

        let body = with_credential("PBFPubKey", self.client.public_key(), &request)?;
        let value = self.client.post_json(endpoints::FEE, &body).await?;
        parse_response(value)
    }
}
