//! The Base58Check version byte table.
//!
//! Exactly four version bytes are recognized. Everything else, including
//! other coins' bytes that happen to decode, is treated as not an address.

use crate::network::Network;
use crate::script::ScriptType;

/// Mainnet pay-to-public-key-hash ("1..." addresses).
pub const MAINNET_P2PKH: u8 = 0x00;
/// Mainnet pay-to-script-hash ("3..." addresses).
pub const MAINNET_P2SH: u8 = 0x05;
/// Testnet pay-to-public-key-hash ("m..." / "n..." addresses).
pub const TESTNET_P2PKH: u8 = 0x6f;
/// Testnet pay-to-script-hash ("2..." addresses).
pub const TESTNET_P2SH: u8 = 0xc4;

/// The version byte for a network and script type pair.
pub fn version_byte(network: Network, script_type: ScriptType) -> u8 {
    match (network, script_type) {
        (Network::Mainnet, ScriptType::P2pkh) => MAINNET_P2PKH,
        (Network::Mainnet, ScriptType::P2sh) => MAINNET_P2SH,
        (Network::Testnet, ScriptType::P2pkh) => TESTNET_P2PKH,
        (Network::Testnet, ScriptType::P2sh) => TESTNET_P2SH,
    }
}

/// Splits a version byte back into its network and script type, or `None`
/// if the byte is not one of the four recognized values.
pub fn classify_version_byte(byte: u8) -> Option<(Network, ScriptType)> {
    match byte {
        MAINNET_P2PKH => Some((Network::Mainnet, ScriptType::P2pkh)),
        MAINNET_P2SH => Some((Network::Mainnet, ScriptType::P2sh)),
        TESTNET_P2PKH => Some((Network::Testnet, ScriptType::P2pkh)),
        TESTNET_P2SH => Some((Network::Testnet, ScriptType::P2sh)),
        _ => None,
    }
}
