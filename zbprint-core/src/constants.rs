//! Agent constants

/// Default Browser Print agent address
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:9100/";

/// Environment variable overriding [`DEFAULT_ENDPOINT`]
pub const ENDPOINT_ENV_VAR: &str = "ZBPRINT_ENDPOINT";

/// Agent endpoint paths, relative to the base address
pub mod paths {
    /// List of reachable devices (JSON)
    pub const AVAILABLE: &str = "available";

    /// Default device (plain text)
    pub const DEFAULT: &str = "default";

    /// Send data to a device
    pub const WRITE: &str = "write";

    /// Read pending data from a device
    pub const READ: &str = "read";
}

/// Device control sequences
pub mod commands {
    /// Host query: error and warning status
    pub const HOST_QUERY_STATUS: &str = "~HQES";
}
