use http::Method;

use super::SERVER;
use crate::metadata::RequestMetadata;
use crate::models::{
    Acknowledgement, AllowedInvoiceCurrency, ApproveInvoiceRequest, CreateInvoiceRequest,
    Envelope, InvoicePage, InvoiceQuery,
};
use crate::{Client, Response, Result};

impl Client {
    /// Lists invoices, optionally narrowed by `filter`.
    pub async fn invoices(&self, query: &InvoiceQuery) -> Result<Envelope<InvoicePage>> {
        let metadata = RequestMetadata::new(Method::GET, format!("{SERVER}/fetch-invoice"))
            .with_query_param("page", query.page.to_string())
            .with_query_param("limit", query.limit.to_string())
            .with_query_param("filter", query.filter.as_str());
        self.execute::<(), _>(metadata, None)
            .await
            .map(Response::into_data)
    }

    /// Lists the currencies invoices can be issued in.
    pub async fn allowed_invoice_currencies(&self) -> Result<Envelope<Vec<AllowedInvoiceCurrency>>> {
        self.get(format!("{SERVER}/fetch-all-allowed-invoice-Currency"))
            .await
            .map(Response::into_data)
    }

    /// Issues an invoice to a customer.
    pub async fn create_invoice(&self, request: &CreateInvoiceRequest) -> Result<Acknowledgement> {
        self.post(format!("{SERVER}/create-invoice"), request)
            .await
            .map(Response::into_data)
    }

    /// Approves a pending invoice, optionally settling it on-chain.
    pub async fn approve_invoice(&self, request: &ApproveInvoiceRequest) -> Result<Acknowledgement> {
        self.post(format!("{SERVER}/approve-invoice"), request)
            .await
            .map(Response::into_data)
    }
}
