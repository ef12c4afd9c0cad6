//! # longswipe - Rust client for the LongSwipe merchant API
//!
//! Typed, async access to LongSwipe vouchers, invoices, escrow, customers,
//! payments and merchant users, built on top of `reqwest`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use longswipe::models::{NewCustomer, Pagination};
//! use longswipe::{Client, Environment};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), longswipe::Error> {
//!     let client = Client::builder()
//!         .environment(Environment::Sandbox)
//!         .public_key(std::env::var("LONGSWIPE_PUBLIC_KEY").unwrap_or_default())
//!         .private_key(std::env::var("LONGSWIPE_PRIVATE_KEY").unwrap_or_default())
//!         .timeout(Duration::from_secs(5))
//!         .build()?;
//!
//!     client
//!         .add_customer(&NewCustomer {
//!             name: "Jane Doe".to_string(),
//!             email: "jane@example.com".to_string(),
//!         })
//!         .await?;
//!
//!     let page = client.customers(&Pagination::default()).await?;
//!     for customer in &page.data.customers {
//!         println!("{} <{}>", customer.name, customer.email);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **One transport for every call** - [`Client::execute`] attaches credentials, sends JSON,
//!   reads the whole body and normalizes the outcome
//! - **Typed envelopes** - every endpoint decodes into [`models::Envelope<T>`] or
//!   [`models::Acknowledgement`]
//! - **Uniform errors** - API failures carry the status code and the API's own message
//! - **Structured logging** - request and response events through `tracing`; keys are never logged
//! - **No hidden behavior** - no retries, no global state, TLS 1.2 minimum
//!
//! ## Error Handling
//!
//! A status of 400 or above becomes [`Error::Api`], whose message is the
//! `message` field of the error envelope, or the raw body when there is none:
//!
//! ```no_run
//! use longswipe::{Client, Error};
//!
//! # async fn example(client: Client) {
//! match client.verify_transaction("order-1042").await {
//!     Ok(tx) => println!("{} {}", tx.data.status, tx.data.amount),
//!     Err(Error::Api { status, message, .. }) => {
//!         eprintln!("API rejected the call ({}): {}", status, message);
//!     }
//!     Err(Error::DecodeFailed { raw_response, serde_error, .. }) => {
//!         eprintln!("Unexpected body {}: {}", raw_response, serde_error);
//!     }
//!     Err(e) if e.is_timeout() => eprintln!("Timed out"),
//!     Err(e) => eprintln!("Request failed: {}", e),
//! }
//! # }
//! ```

pub mod api;
mod client;
mod config;
mod error;
pub mod metadata;
pub mod models;
mod response;

pub use client::{Client, ClientBuilder, PRIVATE_KEY_HEADER};
pub use config::{
    ClientConfig, Environment, DEFAULT_TIMEOUT, PRODUCTION_URL, SANDBOX_URL, USER_AGENT,
};
pub use error::{Error, Result};
pub use response::Response;
