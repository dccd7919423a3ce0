//! Encoding and translation of Bitcoin Cash addresses.
//!
//! Two wire formats are supported:
//!
//! - **Legacy**: Base58Check as inherited from Bitcoin. A version byte in
//!   front of the hash identifies network and script type; a truncated
//!   double-SHA256 checksum trails the payload.
//! - **Cashaddr**: the bech32-derived format Bitcoin Cash introduced. A
//!   human-readable network prefix, the payload repacked into 5-bit groups,
//!   and a 40-bit BCH checksum.
//!
//! Translation decodes the input under whichever format matches and
//! re-encodes the recovered hash under the other:
//!
//! ```
//! use bchaddr_codec::{to_cash_address, to_legacy_address};
//!
//! let cash = "bitcoincash:qpmtetdtqpy5yhflnmmv8s35gkqfdnfdtywdqvue4p";
//! let legacy = to_legacy_address(cash).unwrap();
//! assert_eq!(legacy, "1BppmEwfuWCB3mbGqah2YuQZEZQGK3MfWc");
//! assert_eq!(to_cash_address(&legacy).unwrap(), cash);
//! ```

pub mod base58check;
pub mod cashaddr;
pub mod convert;

pub use convert::{
    decode_address, detect_address_format, detect_address_network, detect_address_type,
    is_valid_address, to_cash_address, to_legacy_address,
};
