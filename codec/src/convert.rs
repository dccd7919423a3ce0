//! Translation between the legacy and cashaddr formats.
//!
//! An input string is classified by trial: first as Base58Check with a
//! recognized version byte, then as cashaddr, inferring the network prefix
//! when the string does not carry one. Whichever trial succeeds yields a
//! [`DecodedAddress`]; translating is re-encoding that value in the other
//! format. Why a particular trial failed is never reported, only that the
//! string is not an address.

use bchaddr_types::{
    classify_version_byte, AddressFormat, DecodedAddress, InvalidAddressError, Network, ScriptType,
};

use crate::base58check;
use crate::cashaddr;

/// Prefixes tried in order when a cashaddr input does not carry its own.
/// `regtest` is accepted on decode but never emitted on encode.
const INFERRED_PREFIXES: [&str; 3] = ["bitcoincash", "bchtest", "regtest"];

/// Translates any recognized address to its legacy form.
///
/// A legacy input is returned verbatim. A cashaddr input is re-encoded as
/// Base58Check under the version byte its network and script type map to.
pub fn to_legacy_address(address: &str) -> Result<String, InvalidAddressError> {
    let decoded = decode_address(address)?;
    if decoded.format == AddressFormat::Legacy {
        return Ok(address.to_string());
    }
    let mut payload = Vec::with_capacity(1 + decoded.hash.len());
    payload.push(decoded.version_byte());
    payload.extend_from_slice(&decoded.hash);
    Ok(base58check::encode(&payload))
}

/// Translates any recognized address to its cashaddr form.
///
/// A cashaddr input that already carries an explicit `prefix:` is returned
/// verbatim, non-canonical casing and `regtest` prefix included. A bare
/// cashaddr body is re-encoded so the result always carries its prefix.
/// Legacy inputs re-encode under `bitcoincash` or `bchtest`.
pub fn to_cash_address(address: &str) -> Result<String, InvalidAddressError> {
    let decoded = decode_address(address)?;
    if decoded.format == AddressFormat::Cashaddr && address.contains(':') {
        return Ok(address.to_string());
    }
    cashaddr::encode(
        decoded.network.cashaddr_prefix(),
        decoded.script_type,
        &decoded.hash,
    )
    .map_err(|_| InvalidAddressError(address.to_string()))
}

/// Classifies an address string and strips its encoding.
///
/// Trials run in a fixed order and the first success wins: Base58Check with
/// a version byte from the four-entry table, then cashaddr. A string that
/// survives no trial is not an address.
pub fn decode_address(address: &str) -> Result<DecodedAddress, InvalidAddressError> {
    decode_base58_scheme(address)
        .or_else(|| decode_cashaddr_scheme(address))
        .ok_or_else(|| InvalidAddressError(address.to_string()))
}

/// The encoding a string uses, without caring what it encodes.
pub fn detect_address_format(address: &str) -> Result<AddressFormat, InvalidAddressError> {
    Ok(decode_address(address)?.format)
}

/// The network an address belongs to.
pub fn detect_address_network(address: &str) -> Result<Network, InvalidAddressError> {
    Ok(decode_address(address)?.network)
}

/// The script type an address commits to.
pub fn detect_address_type(address: &str) -> Result<ScriptType, InvalidAddressError> {
    Ok(decode_address(address)?.script_type)
}

/// Whether the string decodes under any supported format.
pub fn is_valid_address(address: &str) -> bool {
    decode_address(address).is_ok()
}

/// Legacy trial: Base58Check whose leading byte is in the version table.
/// The remaining bytes are the hash, whatever their count.
fn decode_base58_scheme(address: &str) -> Option<DecodedAddress> {
    let payload = base58check::decode(address).ok()?;
    let (&version, hash) = payload.split_first()?;
    let (network, script_type) = classify_version_byte(version)?;
    Some(DecodedAddress {
        hash: hash.to_vec(),
        format: AddressFormat::Legacy,
        network,
        script_type,
    })
}

/// Cashaddr trial: the explicit prefix when the input carries one, otherwise
/// each known prefix in turn until the checksum agrees.
fn decode_cashaddr_scheme(address: &str) -> Option<DecodedAddress> {
    if address.contains(':') {
        return decode_prefixed_cashaddr(address);
    }
    for prefix in INFERRED_PREFIXES {
        let candidate = format!("{}:{}", prefix, address);
        if let Some(decoded) = decode_prefixed_cashaddr(&candidate) {
            return Some(decoded);
        }
    }
    None
}

fn decode_prefixed_cashaddr(address: &str) -> Option<DecodedAddress> {
    let payload = cashaddr::decode(address).ok()?;
    let network = Network::from_cashaddr_prefix(&payload.prefix)?;
    Some(DecodedAddress {
        hash: payload.hash,
        format: AddressFormat::Cashaddr,
        network,
        script_type: payload.script_type,
    })
}
