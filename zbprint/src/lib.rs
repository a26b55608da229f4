//! # zbprint
//!
//! Rust client for the Zebra Browser Print agent.
//!
//! ## Features
//!
//! - Printer discovery (`available` and `default`)
//! - `~HQES` status decoding into a typed report
//! - Raw text, binary and URL printing
//! - Async/await API with a pluggable transport
//!
//! ## Quick Start
//!
//! ```no_run
//! use zbprint::Client;
//!
//! #[tokio::main]
//! async fn main() -> zbprint::Result<()> {
//!     let mut client = Client::new();
//!
//!     // Pick the agent's default printer
//!     let printer = client.default_device().await?;
//!     client.set_device(printer);
//!
//!     // Check status before printing
//!     let status = client.check_status().await?;
//!     println!("{}", status);
//!
//!     client.print("^XA^FO50,50^A0N,50,50^FDzbprint^FS^XZ").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;

// Re-exports
pub use client::Client;
pub use error::{Error, Result};

// Re-export types
pub use zbprint_core::Endpoint;
pub use zbprint_transport::{Blob, HttpTransport, Transport};
pub use zbprint_types::{Device, HeadFault, MediaFault, StatusError, StatusReport};
