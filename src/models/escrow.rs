//! Escrow: funds held by LongSwipe until the parties agree to release them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de::null_as_default;
use super::{CurrencyDetails, Metadata};

/// Lifecycle state of an escrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EscrowStatus {
    Pending,
    Approved,
    Completed,
    Cancelled,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowRequest {
    pub title: String,
    pub description: String,
    pub amount: f64,
    pub currency_abbreviation: String,
    /// Emails of the parties that must approve the release.
    pub recipients: Vec<String>,
    pub reference_id: String,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EscrowInitiated {
    #[serde(deserialize_with = "null_as_default")]
    pub escrow_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reference_id: String,
    /// Code the merchant needs to authorize a later release.
    #[serde(deserialize_with = "null_as_default")]
    pub authorization_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEscrowStatus {
    pub escrow_id: String,
    pub status: EscrowStatus,
}

/// Instructions for funding an escrow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FundRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub escrow_id: String,
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: CurrencyDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deposit_address: String,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Escrow {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: CurrencyDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reference_id: String,
    pub is_funded: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub recipients: Vec<EscrowRecipient>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EscrowRecipient {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    pub has_approved: bool,
    pub payout_details: Option<RecipientAccount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowOtpRequest {
    pub escrow_id: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEscrowRecipient {
    pub escrow_id: String,
    pub email: String,
}

/// A recipient's request that held funds be released.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundReleaseRequest {
    pub escrow_id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Confirms a release with the recipient's OTP and the merchant's code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmFundRelease {
    pub escrow_id: String,
    pub otp: String,
    pub authorization_code: String,
}

/// Releases funds without recipient confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemRelease {
    pub escrow_id: String,
    pub recipient_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetAuthorizationCode {
    pub escrow_id: String,
    pub new_authorization_code: String,
}

/// Where a recipient wants released funds sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientPayoutDetails {
    pub escrow_id: String,
    pub email: String,
    pub currency_abbreviation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockchain_network_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipientAccount {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: CurrencyDetails,
    pub wallet_address: Option<String>,
    pub blockchain_network_id: Option<String>,
}
