//! Platform users and the merchant's own team members.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::de::null_as_default;

/// A LongSwipe user as seen by a merchant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub surname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub other_names: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reg_channel: String,
    #[serde(rename = "externalID", deserialize_with = "null_as_default")]
    pub external_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    pub is_active: bool,
    pub email_verified: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar: String,
    pub is_pin_set: bool,
}

/// A member of the merchant's team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MerchantUser {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMerchantUser {
    pub name: String,
    pub email: String,
    /// For example `"USER"` or `"ADMIN"`.
    pub role: String,
}
