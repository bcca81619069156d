//! Demo of fetching and saving a raw SEC filing.
//!
//! This example demonstrates how to:
//! - Build a client from `RAW_FILINGS_API_KEY`
//! - Fetch a filing and inspect the raw response
//! - Save a filing straight to disk
//!
//! Run with: cargo run --example save_filing_demo

use rawfilings::{FilingRequest, RawFilingsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = RawFilingsClient::from_env()?;
    println!("Using {}", client.config().filing_url());

    // Apple 10-K for fiscal 2023
    let request = FilingRequest::new("000032019323000064").with_ticker("AAPL");

    let response = client.fetch(&request).await?;
    println!("\nHTTP {}", response.status);
    if let Some(content_type) = response.headers.get("content-type") {
        println!("  Content-Type: {:?}", content_type);
    }
    println!("  Size: {} bytes", response.body.len());

    let output = "apple_10k.txt";
    if client.fetch_and_save(&request, output).await? {
        println!("\nSaved filing to {}", output);
    } else {
        println!("\nFiling not saved");
    }

    Ok(())
}
