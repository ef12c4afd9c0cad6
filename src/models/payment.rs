//! Payment requests, deposit addresses, transactions and payouts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::de::null_as_default;
use super::{BlockchainNetwork, CurrencyDetails};

/// Free-form metadata echoed back by the API on the resulting transaction.
pub type Metadata = Map<String, Value>;

/// Requests payment from a LongSwipe user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: f64,
    pub currency: String,
    /// Email, username or phone number of the payer.
    pub user_identifier: String,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    pub reference_id: String,
}

/// Asks for a one-off blockchain address to receive a deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDepositRequest {
    pub amount: f64,
    pub blockchain_network_id: String,
    pub currency_abbreviation: String,
    pub pay_with_currency_abbreviation: String,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    pub reference_id: String,
}

/// Quotes the charges for an [`AddressDepositRequest`] without creating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDepositChargeRequest {
    pub amount: f64,
    pub blockchain_network_id: String,
    pub currency_abbreviation: String,
    pub pay_with_currency_abbreviation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepositAddress {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    pub amount_to_deposit: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub expires_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date_created: String,
    #[serde(deserialize_with = "null_as_default")]
    pub blockchain_network_detail: BlockchainNetwork,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChargeEstimate {
    pub swap_amount: f64,
    pub to_amount: f64,
    pub processing_fee: f64,
    #[serde(rename = "totalGasAndProceesingFeeInFromCurrency")]
    pub total_gas_and_processing_fee_in_from_currency: f64,
    pub total_gas_cost_and_processing_fee_in_wei: f64,
    pub exchange_rate: f64,
    pub percentage_charge: f64,
    pub is_percentage_charge: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub to_currency: CurrencyDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub from_currency: CurrencyDetails,
    pub total_deductable: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub user_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub reference_id: String,
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    pub charged_amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub charge_type: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: CurrencyDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub application_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reference_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meta_data: String,
}

/// Sends funds from the merchant balance to a LongSwipe user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayout {
    pub amount: f64,
    pub currency_abbreviation: String,
    pub user_identifier: String,
    pub reference_id: String,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}
