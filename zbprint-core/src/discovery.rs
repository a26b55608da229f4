//! Discovery reply parsing
//!
//! `available` answers with JSON, `default` with a tab-indented text block:
//!
//! ```text
//! Default Printer
//! 	name: ZDesigner GK420d
//! 	device type: printer
//! 	connection: driver
//! 	uid: ZDesigner GK420d
//! 	provider: com.zebra.ds.webdriver.desktop.provider.DefaultDeviceProvider
//! 	manufacturer: Zebra Technologies
//! ```

use serde_json::Value;
use tracing::trace;

use zbprint_types::Device;

use crate::error::{Error, Result};

/// Separator between `default` reply fields
pub const DEFAULT_FIELD_SEPARATOR: &str = "\n\t";

/// Number of segments in a `default` reply (header + 6 fields)
pub const DEFAULT_FIELD_COUNT: usize = 7;

/// Parse the `available` reply
///
/// Returns the devices listed under `printer`. A missing, non-array or empty
/// `printer` key yields an empty list.
///
/// # Errors
///
/// Returns [`Error::Json`] if the body is not JSON or a descriptor has the
/// wrong shape.
pub fn parse_available(body: &[u8]) -> Result<Vec<Device>> {
    let value: Value = serde_json::from_slice(body)?;

    let Value::Object(mut map) = value else {
        return Ok(Vec::new());
    };

    let devices = match map.remove("printer") {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<Device>, _>>()?,
        _ => Vec::new(),
    };

    trace!("Parsed {} device(s) from available reply", devices.len());

    Ok(devices)
}

/// Parse the `default` reply
///
/// Segment 0 is a header and is skipped; segments 1 to 6 hold name, device
/// type, connection, uid, provider and manufacturer as `label: value`.
///
/// # Examples
///
/// ```
/// use zbprint_core::discovery::parse_default;
///
/// let raw = "_\n\tname: A\n\ttype: B\n\tconn: C\n\tuid: D\n\tprov: E\n\tman: F";
/// let device = parse_default(raw).unwrap();
/// assert_eq!(device.name, "A");
/// assert_eq!(device.manufacturer, "F");
/// assert_eq!(device.version, 0);
/// ```
///
/// # Errors
///
/// - [`Error::EmptyResponse`] if the reply is empty
/// - [`Error::FieldCount`] if the reply does not have exactly 7 segments
/// - [`Error::MissingFieldValue`] if a field has no `:`
pub fn parse_default(text: &str) -> Result<Device> {
    if text.is_empty() {
        return Err(Error::EmptyResponse);
    }

    let segments: Vec<&str> = text.split(DEFAULT_FIELD_SEPARATOR).collect();

    if segments.len() != DEFAULT_FIELD_COUNT {
        return Err(Error::FieldCount {
            expected: DEFAULT_FIELD_COUNT,
            actual: segments.len(),
        });
    }

    let value = |index: usize| {
        field_value(segments[index]).ok_or(Error::MissingFieldValue { index })
    };

    Ok(Device {
        name: value(1)?,
        device_type: value(2)?,
        connection: value(3)?,
        uid: value(4)?,
        provider: value(5)?,
        manufacturer: value(6)?,
        version: 0,
    })
}

/// Text after the first `:`, trimmed
fn field_value(segment: &str) -> Option<String> {
    segment
        .split_once(':')
        .map(|(_, value)| value.trim().to_string())
}
