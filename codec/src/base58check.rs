//! Base58Check encoding over the Bitcoin alphabet.
//!
//! Thin wrapper around `bs58` with the `check` feature: the four-byte
//! double-SHA256 checksum is appended on encode and verified and stripped on
//! decode. The alphabet is pinned here so callers never touch `bs58` types.

use thiserror::Error;

/// Base58Check decoding failure. Covers bad characters, truncation, and
/// checksum mismatch; callers generally only care that the string is not
/// Base58Check at all.
#[derive(Debug, Error)]
#[error("base58check decode failed: {0}")]
pub struct Base58CheckError(#[from] bs58::decode::Error);

/// Encodes `payload` as Base58Check. The checksum is computed over the whole
/// payload, so the version byte must already be in front.
pub fn encode(payload: &[u8]) -> String {
    bs58::encode(payload)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .with_check()
        .into_string()
}

/// Decodes a Base58Check string, verifying and stripping the checksum.
/// The returned bytes start with the version byte.
pub fn decode(text: &str) -> Result<Vec<u8>, Base58CheckError> {
    let payload = bs58::decode(text)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .with_check(None)
        .into_vec()?;
    Ok(payload)
}
