//! The decoded, format-independent form of an address.

use serde::{Deserialize, Serialize};

use crate::format::AddressFormat;
use crate::network::Network;
use crate::script::ScriptType;
use crate::version::version_byte;

/// Everything an address string encodes, with the encoding stripped away.
///
/// Translating between formats is decoding to this struct and re-encoding.
/// `format` records which encoding the string arrived in; the remaining
/// fields are encoding-independent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecodedAddress {
    /// The raw hash the address commits to. 20 bytes for addresses derived
    /// from RIPEMD-160, but cashaddr admits seven longer sizes up to 64.
    pub hash: Vec<u8>,
    /// The encoding the address string used.
    pub format: AddressFormat,
    /// Which network the address belongs to.
    pub network: Network,
    /// What kind of locking script the hash commits to.
    pub script_type: ScriptType,
}

impl DecodedAddress {
    /// The Base58Check version byte this address re-encodes under.
    pub fn version_byte(&self) -> u8 {
        version_byte(self.network, self.script_type)
    }
}
