//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No printers available")]
    NoPrintersAvailable,

    #[error("There's no default printer")]
    NoDefaultPrinter(#[source] zbprint_core::Error),

    #[error("Protocol error: {0}")]
    Core(#[from] zbprint_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] zbprint_transport::Error),

    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl Error {
    /// Check if the agent answered but reported no usable printer
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::NoPrintersAvailable | Self::NoDefaultPrinter(_))
    }

    /// Check if the request or its response failed
    pub fn is_transport(&self) -> bool {
        !self.is_empty_result()
    }
}
