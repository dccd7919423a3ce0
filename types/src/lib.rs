//! Fundamental types for Bitcoin Cash address translation.
//!
//! This crate defines the vocabulary shared by every other crate in the workspace:
//! address formats, networks, script types, version bytes, and the decoded form an
//! address is reduced to before re-encoding.

pub mod error;
pub mod format;
pub mod network;
pub mod payload;
pub mod script;
pub mod version;

pub use error::InvalidAddressError;
pub use format::AddressFormat;
pub use network::Network;
pub use payload::DecodedAddress;
pub use script::ScriptType;
pub use version::{classify_version_byte, version_byte};
