//! Discovery and status example

use zbprint::Client;

#[tokio::main]
async fn main() -> zbprint::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Reads ZBPRINT_ENDPOINT, defaults to http://127.0.0.1:9100/
    let mut client = Client::from_env();

    println!("Agent at {}", client.endpoint());

    match client.available_devices().await {
        Ok(devices) => {
            for device in &devices {
                println!("✓ Available: {}", device);
            }
        }
        Err(e) if e.is_empty_result() => println!("No printers connected to the agent"),
        Err(e) => return Err(e),
    }

    let printer = client.default_device().await?;
    println!("✓ Default: {}", printer);
    client.set_device(printer);

    let status = client.check_status().await?;
    println!("✓ Status: {}", status);

    Ok(())
}
