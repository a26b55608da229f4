//! # zbprint-core
//!
//! Protocol primitives for the Zebra Browser Print agent.
//!
//! This crate provides the transport-independent pieces:
//! - Base address normalization
//! - Agent paths and control sequences
//! - `~HQES` status decoding
//! - Discovery reply parsing

pub mod constants;
pub mod discovery;
pub mod endpoint;
pub mod error;
pub mod status;

pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use status::{StatusField, StatusFields};
