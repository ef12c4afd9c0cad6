//! Example demonstrating error handling.
//!
//! This example shows how to:
//! - Tell API rejections apart from transport failures
//! - Read the status code and the API's message
//! - Fall back to the raw body when a response does not decode
//! - Recognise timeouts
//!
//! Run with:
//! `LONGSWIPE_PUBLIC_KEY=... LONGSWIPE_PRIVATE_KEY=... cargo run --example error_handling`

use longswipe::metadata::RequestMetadata;
use longswipe::models::Envelope;
use longswipe::{Client, Environment, Error};
use serde::Deserialize;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("longswipe=info")
        .init();

    let public_key = std::env::var("LONGSWIPE_PUBLIC_KEY").unwrap_or_default();
    let private_key = std::env::var("LONGSWIPE_PRIVATE_KEY").unwrap_or_default();

    println!("=== Example 1: Missing credentials ===");
    match Client::builder().environment(Environment::Sandbox).build() {
        Ok(_) => println!("Unexpectedly built a client without keys"),
        Err(Error::ConfigurationError(message)) => println!("Configuration error: {}", message),
        Err(e) => println!("Other error: {}", e),
    }
    println!();

    let client = Client::builder()
        .environment(Environment::Sandbox)
        .public_key(public_key.as_str())
        .private_key(private_key.as_str())
        .build()?;

    println!("=== Example 2: API errors ===");
    match client.verify_transaction("no-such-reference").await {
        Ok(tx) => println!("Found transaction {}", tx.data.id),
        Err(Error::Api {
            status,
            message,
            raw_response,
            ..
        }) => {
            println!("API error!");
            println!("  Status: {}", status);
            println!("  Is client error (4xx): {}", status.is_client_error());
            println!("  Message: {}", message);
            println!("  Raw response: {}", raw_response);
        }
        Err(e) => println!("Other error: {}", e),
    }
    println!();

    println!("=== Example 3: Decode failures ===");
    #[derive(Debug, Default, Deserialize)]
    #[allow(dead_code)]
    struct WrongShape {
        nonexistent_field: String,
    }

    match client
        .get::<Envelope<WrongShape>>("/merchant-integrations/fetch-supported-currencies")
        .await
    {
        Ok(response) => println!("Decoded: {:?}", response.data),
        Err(Error::DecodeFailed {
            raw_response,
            serde_error,
            status,
        }) => {
            println!("Decode failed with status {}", status);
            println!("  Serde error: {}", serde_error);
            println!("  Raw body starts with: {:.80}", raw_response);
        }
        Err(e) => println!("Other error: {}", e),
    }
    println!();

    println!("=== Example 4: Raw responses ===");
    let metadata = RequestMetadata::new(
        http::Method::GET,
        "/merchant-integrations-server/health",
    );
    match client.execute_raw::<()>(metadata, None).await {
        Ok(response) => println!("{} in {:?}: {}", response.status, response.latency, response.raw_body),
        Err(e) => println!("Health check failed: {} (status {:?})", e, e.status()),
    }
    println!();

    println!("=== Example 5: Timeouts ===");
    let impatient = Client::builder()
        .environment(Environment::Sandbox)
        .public_key(public_key)
        .private_key(private_key)
        .timeout(Duration::from_millis(1))
        .build()?;

    match impatient.health_check().await {
        Ok(ack) => println!("Answered in time: {}", ack.message),
        Err(e) if e.is_timeout() => println!("Timed out: {}", e),
        Err(e) => println!("Other error: {}", e),
    }

    Ok(())
}
