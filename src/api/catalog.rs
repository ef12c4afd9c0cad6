use super::{INTEGRATIONS, SERVER};
use crate::models::{Acknowledgement, CryptoNetwork, CurrencyList, Envelope};
use crate::{Client, Response, Result};

impl Client {
    /// Checks that the merchant API is up and the credentials are accepted.
    pub async fn health_check(&self) -> Result<Acknowledgement> {
        self.get(format!("{SERVER}/health"))
            .await
            .map(Response::into_data)
    }

    /// Lists the blockchain networks and tokens the platform supports.
    pub async fn supported_networks(&self) -> Result<Envelope<Vec<CryptoNetwork>>> {
        self.get(format!("{INTEGRATIONS}/fetch-supported-cryptonetworks"))
            .await
            .map(Response::into_data)
    }

    /// Lists the fiat and crypto currencies the platform supports.
    pub async fn supported_currencies(&self) -> Result<Envelope<CurrencyList>> {
        self.get(format!("{INTEGRATIONS}/fetch-supported-currencies"))
            .await
            .map(Response::into_data)
    }
}
