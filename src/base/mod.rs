//! Base types and error handling.
//!
//! Provides the bridge-wide error taxonomy:
//! - [`BridgeError`](error::BridgeError): typed failures with stable string codes

pub mod error;
