//! Label printing example

use std::time::Duration;

use zbprint::{Client, HttpTransport};

const LABEL: &str = concat!(
    "^XA",
    "^FO50,50^A0N,50,50^FDzbprint^FS",
    "^FO50,120^BY2^BCN,80,Y,N,N^FD0123456789^FS",
    "^XZ",
);

#[tokio::main]
async fn main() -> zbprint::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Honors ZBPRINT_ENDPOINT, falls back to the local agent
    let mut client = Client::from_env()
        .with_transport(HttpTransport::new().with_timeout(Duration::from_secs(10)));

    println!("Using agent at {}", client.endpoint());

    let printer = client.default_device().await?;
    client.set_device(printer);

    let status = client.check_status().await?;
    if !status.is_ready_to_print {
        println!("Printer not ready: {}", status.joined_errors());
        return Ok(());
    }

    println!("Printing label...");
    client.print(LABEL).await?;

    if let Ok(url) = std::env::var("LABEL_URL") {
        println!("Printing {}...", url);
        client.print_url(&url).await?;
    }

    println!("Done!");

    Ok(())
}
