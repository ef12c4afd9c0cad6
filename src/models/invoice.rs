//! Merchant invoices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::de::null_as_default;
use super::{BlockchainNetwork, CurrencyDetails, MerchantUser};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemRequest {
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    pub full_name: String,
    pub email: String,
    pub merchant_code: String,
    pub invoice_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub invoice_items: Vec<InvoiceItemRequest>,
    pub currency_abbreviation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockchain_network_abbreviation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveInvoiceRequest {
    pub invoice_id: Uuid,
    #[serde(default)]
    pub on_chain: bool,
}

/// Listing parameters for invoices. `filter` narrows by status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub filter: String,
}

impl Default for InvoiceQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            filter: String::new(),
        }
    }
}

/// One page of the invoice listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoicePage {
    #[serde(deserialize_with = "null_as_default")]
    pub invoices: Vec<Invoice>,
    pub total: i64,
}

/// An issued invoice.
///
/// Identifiers and dates are kept as the strings the API sends; their format
/// varies between deployments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Invoice {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub invoice_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub invoice_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub due_date: String,
    pub total_amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub invoice_items: Vec<InvoiceItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: CurrencyDetails,
    pub blockchain_network: Option<BlockchainNetwork>,
    pub merchant_user: Option<MerchantUser>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// A currency the merchant may bill in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AllowedInvoiceCurrency {
    #[serde(deserialize_with = "null_as_default")]
    pub currency: CurrencyDetails,
    pub is_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invoice_keeps_identifiers_and_dates_verbatim() {
        let invoice: Invoice = serde_json::from_value(json!({
            "id": "inv_7781",
            "invoiceNumber": "INV-7781",
            "userId": null,
            "invoiceDate": "2025-03-01",
            "dueDate": "",
            "totalAmount": 300.0,
            "status": "PENDING",
            "invoiceItems": [{
                "id": "item_1",
                "description": "Widget",
                "quantity": 3,
                "unitPrice": 100.0,
                "totalPrice": 300.0,
                "createdAt": "2025-03-01 10:00:00"
            }],
            "createdAt": "2025-03-01T10:00:00.123456"
        }))
        .unwrap();

        assert_eq!(invoice.id, "inv_7781");
        assert!(invoice.user_id.is_empty());
        assert_eq!(invoice.invoice_date, "2025-03-01");
        assert!(invoice.due_date.is_empty());
        assert_eq!(invoice.created_at, "2025-03-01T10:00:00.123456");
        assert_eq!(invoice.invoice_items[0].created_at, "2025-03-01 10:00:00");
        assert!(invoice.updated_at.is_empty());
    }

    #[test]
    fn create_invoice_serializes_rfc3339_dates() {
        use chrono::TimeZone;

        let request = CreateInvoiceRequest {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            merchant_code: "MRC-42".to_string(),
            invoice_date: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
            due_date: Utc.with_ymd_and_hms(2025, 3, 31, 0, 0, 0).unwrap(),
            invoice_items: vec![],
            currency_abbreviation: "USDT".to_string(),
            blockchain_network_abbreviation: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["invoiceDate"], "2025-03-01T00:00:00Z");
        assert!(value.get("blockchainNetworkAbbreviation").is_none());
    }
}
