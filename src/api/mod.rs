//! One method per LongSwipe endpoint, grouped by resource.
//!
//! Each method fixes the HTTP verb, path and response type, then defers to
//! [`Client::execute`](crate::Client::execute). They return the decoded
//! envelope; use `execute` directly when the status, headers or latency are
//! needed as well.
//!
//! Identifiers interpolated into paths are sent as given. Query strings are
//! form-urlencoded.

mod catalog;
mod customers;
mod escrow;
mod invoices;
mod payments;
mod users;
mod vouchers;

/// Prefix for server-to-server merchant endpoints.
pub(crate) const SERVER: &str = "/merchant-integrations-server";

/// Prefix for merchant endpoints shared with the browser integration.
pub(crate) const INTEGRATIONS: &str = "/merchant-integrations";
