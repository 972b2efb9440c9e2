use tracing::info;

use super::super::models::Bank;
use crate::client::{endpoints, RaveClient};
use crate::core::{RaveError, Result};

/// Bank listing
pub struct BankService<'a> {
    client: &'a RaveClient,
}

impl<'a> BankService<'a> {
    pub(crate) fn new(client: &'a RaveClient) -> Self {
        Self { client }
    }

    /// List the Nigerian banks that support account charges
    pub async fn list_banks(&self) -> Result<Vec<Bank>> {
        let value = self.client.get_json(endpoints::LIST_BANKS).await?;

        let banks: Vec<Bank> = serde_json::from_value(value)
            .map_err(|e| RaveError::invalid_response(format!("bank list: {}", e)))?;

        info!(count = banks.len(), "Fetched bank list");
        Ok(banks)
    }
}
