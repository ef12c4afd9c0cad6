use http::Method;

use super::SERVER;
use crate::metadata::RequestMetadata;
use crate::models::{Acknowledgement, Customer, CustomerPage, CustomerUpdate, Envelope, NewCustomer, Pagination};
use crate::{Client, Response, Result};

impl Client {
    /// Lists the merchant's customers, one page at a time.
    pub async fn customers(&self, pagination: &Pagination) -> Result<Envelope<CustomerPage>> {
        let metadata = RequestMetadata::new(Method::GET, format!("{SERVER}/fetch-customers"))
            .with_query_param("page", pagination.page.to_string())
            .with_query_param("limit", pagination.limit.to_string())
            .with_query_param("search", pagination.search.as_str());
        self.execute::<(), _>(metadata, None)
            .await
            .map(Response::into_data)
    }

    /// Looks a customer up by email address.
    pub async fn customer_by_email(&self, email: &str) -> Result<Envelope<Customer>> {
        self.get(format!("{SERVER}/fetch-customer-by-email/{email}"))
            .await
            .map(Response::into_data)
    }

    /// Registers a new customer under the merchant.
    pub async fn add_customer(&self, customer: &NewCustomer) -> Result<Acknowledgement> {
        self.post(format!("{SERVER}/add-new-customer"), customer)
            .await
            .map(Response::into_data)
    }

    /// Replaces a customer's name and email.
    pub async fn update_customer(&self, update: &CustomerUpdate) -> Result<Acknowledgement> {
        self.patch(format!("{SERVER}/update-customer"), update)
            .await
            .map(Response::into_data)
    }

    /// Removes a customer by id.
    pub async fn delete_customer(&self, customer_id: &str) -> Result<Acknowledgement> {
        self.delete(format!("{SERVER}/delete-customer/{customer_id}"))
            .await
            .map(Response::into_data)
    }
}
