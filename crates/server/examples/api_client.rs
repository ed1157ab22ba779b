//! Examples for using the Care Cards Server API

use reqwest::Client;
use serde_json::json;

const SERVER_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    // Example 1: Health check
    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: Generate a poem
    println!("2. Generate Poem:");
    let resp = client
        .post(format!("{SERVER_URL}/api/demo-generate"))
        .json(&json!({
            "recipientName": "Maya",
            "relationship": "my best friend",
            "occasion": "Birthday",
            "tone": "Celebratory",
            "messageIntent": "I hope this year brings you everything you have been waiting for",
            "senderName": "Jordan",
            "signature": "With Love"
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    let body: serde_json::Value = resp.json().await?;
    let poem = body["poem"].as_str().unwrap_or_default().to_string();
    println!("{poem}");
    println!();

    // Example 3: Missing required fields
    println!("3. Validation Error:");
    let resp = client
        .post(format!("{SERVER_URL}/api/demo-generate"))
        .json(&json!({ "recipientName": "Maya" }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 4: Download the card
    println!("4. Download Card:");
    let resp = client
        .post(format!("{SERVER_URL}/api/card"))
        .json(&json!({
            "poem": poem,
            "recipientName": "Maya",
            "relationship": "my best friend",
            "occasion": "Birthday",
            "mode": "demo"
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    if let Some(disposition) = resp.headers().get("content-disposition") {
        println!("Disposition: {}", disposition.to_str()?);
    }
    let pdf = resp.bytes().await?;
    println!("Received {} bytes", pdf.len());

    Ok(())
}
