//! Merchant customers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::de::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(rename = "merchantID")]
    pub merchant_id: Option<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

/// One page of the customer listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerPage {
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    #[serde(rename = "customer", alias = "customers", deserialize_with = "null_as_default")]
    pub customers: Vec<Customer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub id: String,
    pub name: String,
    pub email: String,
}
