//! Basic example against the LongSwipe sandbox.
//!
//! This example shows how to:
//! - Build a client from environment credentials
//! - List supported currencies and networks
//! - Page through customers
//! - Verify a voucher and quote its redemption charges
//!
//! Run with:
//! `LONGSWIPE_PUBLIC_KEY=... LONGSWIPE_PRIVATE_KEY=... cargo run --example basic_usage`

use longswipe::models::{Pagination, RedeemRequest, VerifyVoucherRequest};
use longswipe::{Client, Environment, Error};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("longswipe=debug,basic_usage=info")
        .init();

    let client = Client::builder()
        .environment(Environment::Sandbox)
        .public_key(std::env::var("LONGSWIPE_PUBLIC_KEY").unwrap_or_default())
        .private_key(std::env::var("LONGSWIPE_PRIVATE_KEY").unwrap_or_default())
        .timeout(Duration::from_secs(15))
        .build()?;

    println!("=== Health Check ===");
    let health = client.health_check().await?;
    println!("{} ({})", health.message, health.code);
    println!();

    println!("=== Supported Currencies ===");
    let currencies = client.supported_currencies().await?;
    for currency in &currencies.data.currencies {
        println!(
            "{:<6} {:<24} {}",
            currency.abbreviation, currency.currency, currency.currency_type
        );
    }
    println!();

    println!("=== Supported Networks ===");
    let networks = client.supported_networks().await?;
    for network in &networks.data {
        let tokens: Vec<_> = network
            .crypto_currencies
            .iter()
            .map(|c| c.currency_name.as_str())
            .collect();
        println!("{} (chain {}): {}", network.network_name, network.chain_id, tokens.join(", "));
    }
    println!();

    println!("=== Customers ===");
    let page = client.customers(&Pagination::default()).await?;
    println!("{} customers in total", page.data.total);
    for customer in &page.data.customers {
        println!("  {} <{}>", customer.name, customer.email);
    }
    println!();

    println!("=== Voucher ===");
    let code = std::env::var("LONGSWIPE_VOUCHER_CODE").unwrap_or_else(|_| "LS3263655440".to_string());
    let voucher = client
        .verify_voucher(&VerifyVoucherRequest {
            voucher_code: code.clone(),
        })
        .await?;
    println!(
        "Voucher {}: balance {} {}",
        voucher.data.code, voucher.data.balance, voucher.data.generated_currency.abbreviation
    );

    let quote = client
        .voucher_redemption_charges(&RedeemRequest {
            voucher_code: code,
            amount: voucher.data.balance.min(10.0),
            to_currency_abbreviation: Some("USDT".to_string()),
            ..Default::default()
        })
        .await?;
    println!(
        "Redeeming {} yields {} {} (fee {})",
        quote.data.charges.amount,
        quote.data.charges.to_amount,
        quote.data.charges.to_currency.abbreviation,
        quote.data.charges.processing_fee
    );

    Ok(())
}
