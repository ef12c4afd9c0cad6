//! Vouchers: verification, redemption and the charges involved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::de::null_as_default;
use super::{CurrencyDetails, UserProfile};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyVoucherRequest {
    pub voucher_code: String,
}

/// Redemption request; also used to quote redemption charges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemRequest {
    pub voucher_code: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_pin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_currency_abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<String>,
}

/// Buys a voucher on behalf of an existing customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVoucherRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockchain_network_id: Option<Uuid>,
    pub currency_id: Uuid,
    pub amount_to_purchase: f64,
    pub customer_id: Uuid,
    #[serde(default)]
    pub on_chain: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Voucher {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    pub amount: f64,
    pub balance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub generated_currency: CurrencyDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    pub was_paid_for: bool,
    pub is_used: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub created_for_merchant: bool,
    pub created_for_existing_user: bool,
    pub created_for_non_existing_user: bool,
    pub is_locked: bool,
    #[serde(rename = "onchain")]
    pub on_chain: bool,
    #[serde(rename = "onchainProcessing")]
    pub on_chain_processing: bool,
    pub crypto_voucher_details: Option<CryptoVoucherDetails>,
    #[serde(deserialize_with = "null_as_default")]
    pub redeemed_vouchers: Vec<RedeemedVoucher>,
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meta_data: String,
}

/// On-chain state of a crypto-backed voucher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CryptoVoucherDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub code_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub balance: String,
    #[serde(deserialize_with = "null_as_default")]
    pub creator: String,
    pub is_redeemed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_hash: String,
}

/// A single (possibly partial) redemption of a voucher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RedeemedVoucher {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(rename = "redeemedUserID")]
    pub redeemed_user_id: Option<Uuid>,
    pub redeemer_wallet_address: Option<String>,
    #[serde(rename = "voucherID", deserialize_with = "null_as_default")]
    pub voucher_id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub user: UserProfile,
    pub amount: f64,
    pub is_merchant: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Fee and exchange-rate breakdown for a redemption or swap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayoutCharges {
    #[serde(rename = "swapAmount")]
    pub amount: f64,
    pub to_amount: f64,
    pub processing_fee: f64,
    // Misspelled on the wire.
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

/// Payload of the redemption-charges endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedemptionDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub charges: PayoutCharges,
    #[serde(deserialize_with = "null_as_default")]
    pub voucher: Voucher,
}
