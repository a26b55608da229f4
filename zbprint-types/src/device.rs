//! Printer descriptors

use std::fmt;

use serde::{Deserialize, Serialize};

/// A printer reachable through the Browser Print agent
///
/// Field names serialize in camelCase, which is what the agent emits in its
/// `available` listing and expects back in `write`/`read` requests.
///
/// # Examples
///
/// ```
/// use zbprint_types::Device;
///
/// let device: Device = serde_json::from_str(
///     r#"{"name":"ZD420","deviceType":"printer","connection":"usb","uid":"ZD420-1",
///         "provider":"com.zebra.ds.webdriver.desktop.provider.DefaultDeviceProvider",
///         "manufacturer":"Zebra Technologies","version":3}"#,
/// ).unwrap();
/// assert_eq!(device.device_type, "printer");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Device {
    /// Display name reported by the agent
    pub name: String,

    /// Device class (`printer`, `scale`, ...)
    pub device_type: String,

    /// Connection kind (`usb`, `network`, `driver`, ...)
    pub connection: String,

    /// Unique identifier used by the agent to route requests
    pub uid: String,

    /// Agent-side provider that owns the device
    pub provider: String,

    /// Manufacturer string
    pub manufacturer: String,

    /// Descriptor version (0 when parsed from the plain-text `default` reply)
    pub version: u32,
}

impl Device {
    pub fn new(name: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uid: uid.into(),
            ..Self::default()
        }
    }

    /// Set the device class
    pub fn with_device_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = device_type.into();
        self
    }

    /// Set the connection kind
    pub fn with_connection(mut self, connection: impl Into<String>) -> Self {
        self.connection = connection.into();
        self
    }

    /// Set the provider
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Set the manufacturer
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Device[{} ({}, {}), uid: {}]",
            self.name, self.device_type, self.connection, self.uid
        )
    }
}
