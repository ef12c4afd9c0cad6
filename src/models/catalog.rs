//! Currencies and blockchain networks supported by the platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::de::null_as_default;

/// A currency as embedded in vouchers, invoices and charge breakdowns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    // The API capitalises this one field.
    #[serde(
        rename = "Abbreviation",
        alias = "abbreviation",
        alias = "abbrev",
        deserialize_with = "null_as_default"
    )]
    pub abbreviation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_type: String,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// An entry of the supported-currencies listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Currency {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub abbreviation: String,
    pub is_active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_type: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload of the supported-currencies endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyList {
    #[serde(deserialize_with = "null_as_default")]
    pub currencies: Vec<Currency>,
}

/// A blockchain network with the tokens available on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CryptoNetwork {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub network_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rpc_url: String,
    #[serde(rename = "chainID", deserialize_with = "null_as_default")]
    pub chain_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub block_explorer_url: String,
    #[serde(rename = "cryptocurrencies", deserialize_with = "null_as_default")]
    pub crypto_currencies: Vec<CryptoCurrency>,
    #[serde(deserialize_with = "null_as_default")]
    pub network_type: String,
}

/// A token deployed on a [`CryptoNetwork`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CryptoCurrency {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_data: CurrencyDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub longswipe_contract_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_decimals: String,
    #[serde(rename = "networkID")]
    pub network_id: Option<Uuid>,
    pub status: bool,
}

/// Compact network description attached to invoices and deposit addresses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockchainNetwork {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub network_name: String,
    #[serde(rename = "chainID", deserialize_with = "null_as_default")]
    pub chain_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub block_explorer_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub network_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub network_logo: String,
}

/// Page/limit/search parameters for listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub search: String,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: String::new(),
        }
    }
}
