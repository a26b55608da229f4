//! Type definitions for zbprint

pub mod device;
pub mod error;
pub mod status;

pub use device::Device;
pub use error::{Error, Result};
pub use status::{HeadFault, MediaFault, StatusError, StatusReport};
