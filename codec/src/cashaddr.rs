//! The cashaddr address format.
//!
//! Layout: `prefix ':' base32(version_byte ++ hash) ++ base32(checksum)`.
//! The base32 alphabet is cashaddr's own, the checksum is a 40-bit BCH code
//! over GF(32) covering both prefix and payload, and the version byte packs
//! the script type into bits 3-6 and a hash-length code into bits 0-2.
//!
//! Unlike bech32 the prefix contributes only the lower 5 bits of each
//! character to the checksum, followed by a single zero separator.

use bchaddr_types::ScriptType;
use thiserror::Error;

/// Cashaddr base32 alphabet: maps a 5-bit value to an ASCII character.
const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Reverse lookup table: ASCII byte to 5-bit value (0xFF = invalid).
const CHARSET_REV: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < 32 {
        table[CHARSET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Script type bits of the version byte.
const TYPE_P2PKH: u8 = 0x00;
const TYPE_P2SH: u8 = 0x08;
const TYPE_MASK: u8 = 0x78;

/// Hash length code bits of the version byte, indexing [`HASH_SIZES`].
const SIZE_MASK: u8 = 0x07;

/// The eight hash lengths the version byte can express, in size-code order.
const HASH_SIZES: [usize; 8] = [20, 24, 28, 32, 40, 48, 56, 64];

/// The checksum occupies the last eight 5-bit groups of the payload.
const CHECKSUM_LEN: usize = 8;

/// Generator polynomials of the 40-bit BCH code, one per bit of the
/// accumulator's top 5 bits.
const GENERATORS: [u64; 5] = [
    0x98f2bc8e61,
    0x79b76d99e2,
    0xf33e5fb3c4,
    0xae2eabe2a8,
    0x1e4f43e470,
];

/// Why a string failed to parse as cashaddr.
#[derive(Debug, Error)]
pub enum CashaddrError {
    #[error("upper and lower case cannot be mixed")]
    MixedCase,

    #[error("missing ':' prefix separator")]
    MissingSeparator,

    #[error("character outside the cashaddr alphabet: {0}")]
    InvalidChar(char),

    #[error("checksum did not verify")]
    BadChecksum,

    #[error("payload too short for a version byte and checksum")]
    TruncatedPayload,

    #[error("nonzero padding bits")]
    BadPadding,

    #[error("hash is {found} bytes but the version byte says {expected}")]
    WrongHashLength { expected: usize, found: usize },

    #[error("unrecognized script type bits in version byte: {0:#04x}")]
    UnknownScriptType(u8),

    #[error("hash length not encodable: {0}")]
    UnsupportedHashLength(usize),
}

/// A decoded cashaddr string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CashaddrPayload {
    /// The prefix the string carried before the ':', folded to lowercase.
    pub prefix: String,
    /// Script type recovered from the version byte.
    pub script_type: ScriptType,
    /// The raw hash; its length is one of [`HASH_SIZES`].
    pub hash: Vec<u8>,
}

/// Encodes a hash as a cashaddr string under the given lowercase prefix.
///
/// The hash length must be one of the eight the version byte can express;
/// 20 bytes for every address derived from RIPEMD-160.
pub fn encode(prefix: &str, script_type: ScriptType, hash: &[u8]) -> Result<String, CashaddrError> {
    let size_code = HASH_SIZES
        .iter()
        .position(|&len| len == hash.len())
        .ok_or(CashaddrError::UnsupportedHashLength(hash.len()))? as u8;
    let type_bits = match script_type {
        ScriptType::P2pkh => TYPE_P2PKH,
        ScriptType::P2sh => TYPE_P2SH,
    };
    Ok(encode_raw(prefix, type_bits | size_code, hash))
}

/// Encodes without validating the version byte against the hash length.
/// [`encode`] is the checked front door; tests use this to build strings
/// [`decode`] must reject.
pub(crate) fn encode_raw(prefix: &str, version_byte: u8, hash: &[u8]) -> String {
    let mut payload = Vec::with_capacity(1 + hash.len());
    payload.push(version_byte);
    payload.extend_from_slice(hash);
    let payload = pack_fives(&payload);

    // The checksum is computed with eight zero groups standing in for itself.
    let mut checksum_input = expand_prefix(prefix);
    checksum_input.extend_from_slice(&payload);
    checksum_input.extend_from_slice(&[0; CHECKSUM_LEN]);
    let checksum = polymod(&checksum_input);

    let mut out = String::with_capacity(prefix.len() + 1 + payload.len() + CHECKSUM_LEN);
    out.push_str(prefix);
    out.push(':');
    for &five in &payload {
        out.push(CHARSET[five as usize] as char);
    }
    for i in (0..CHECKSUM_LEN).rev() {
        let five = ((checksum >> (i * 5)) & 0x1f) as u8;
        out.push(CHARSET[five as usize] as char);
    }
    out
}

/// Decodes a cashaddr string, verifying case, charset, checksum, padding,
/// and the version byte against the hash it carries.
pub fn decode(text: &str) -> Result<CashaddrPayload, CashaddrError> {
    check_single_case(text)?;
    let text = text.to_ascii_lowercase();

    let (prefix, body) = text
        .split_once(':')
        .ok_or(CashaddrError::MissingSeparator)?;
    if prefix.is_empty() {
        return Err(CashaddrError::MissingSeparator);
    }
    if body.len() <= CHECKSUM_LEN {
        return Err(CashaddrError::TruncatedPayload);
    }

    let mut values = Vec::with_capacity(body.len());
    for c in body.chars() {
        let five = match CHARSET_REV.get(c as usize) {
            Some(&v) if v != 0xFF => v,
            _ => return Err(CashaddrError::InvalidChar(c)),
        };
        values.push(five);
    }

    let mut checksum_input = expand_prefix(prefix);
    checksum_input.extend_from_slice(&values);
    if polymod(&checksum_input) != 0 {
        return Err(CashaddrError::BadChecksum);
    }

    let payload = unpack_fives(&values[..values.len() - CHECKSUM_LEN])?;
    let (&version, hash) = payload
        .split_first()
        .ok_or(CashaddrError::TruncatedPayload)?;

    let expected = HASH_SIZES[(version & SIZE_MASK) as usize];
    if hash.len() != expected {
        return Err(CashaddrError::WrongHashLength {
            expected,
            found: hash.len(),
        });
    }
    let script_type = match version & TYPE_MASK {
        TYPE_P2PKH => ScriptType::P2pkh,
        TYPE_P2SH => ScriptType::P2sh,
        bits => return Err(CashaddrError::UnknownScriptType(bits)),
    };

    Ok(CashaddrPayload {
        prefix: prefix.to_string(),
        script_type,
        hash: hash.to_vec(),
    })
}

/// Mixed case is malleation; a string must be all-lower or all-upper.
fn check_single_case(text: &str) -> Result<(), CashaddrError> {
    let has_lower = text.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = text.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(CashaddrError::MixedCase);
    }
    Ok(())
}

/// The prefix's checksum contribution: the lower 5 bits of each character,
/// then a zero separator.
fn expand_prefix(prefix: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(prefix.len() + 1);
    for byte in prefix.bytes() {
        out.push(byte & 0x1f);
    }
    out.push(0);
    out
}

/// Repacks bytes into 5-bit groups, zero-padding the last group on the right.
fn pack_fives(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity((bytes.len() * 8).div_ceil(5));
    let mut acc: u32 = 0;
    let mut bits = 0u32;
    for &byte in bytes {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(((acc >> bits) & 0x1f) as u8);
        }
    }
    if bits > 0 {
        out.push(((acc << (5 - bits)) & 0x1f) as u8);
    }
    out
}

/// Repacks 5-bit groups back into bytes. A leftover group that contributed
/// no byte, or nonzero padding bits, is malleation and rejected.
fn unpack_fives(fives: &[u8]) -> Result<Vec<u8>, CashaddrError> {
    let mut out = Vec::with_capacity(fives.len() * 5 / 8);
    let mut acc: u32 = 0;
    let mut bits = 0u32;
    for &five in fives {
        acc = (acc << 5) | u32::from(five);
        bits += 5;
        while bits >= 8 {
            bits -= 8;
            out.push(((acc >> bits) & 0xff) as u8);
        }
    }
    if bits >= 5 || (bits > 0 && (acc << (8 - bits)) & 0xff != 0) {
        return Err(CashaddrError::BadPadding);
    }
    Ok(out)
}

/// The 40-bit BCH checksum over a sequence of 5-bit groups. Zero for a
/// well-formed prefix+payload+checksum sequence.
fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x07ffffffff) << 5) ^ u64::from(d);
        for (i, generator) in GENERATORS.iter().enumerate() {
            if c0 & (1 << i) != 0 {
                c ^= generator;
            }
        }
    }
    c ^ 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verify(prefix: &str, script_type: ScriptType, hash_hex: &str, expected: &str) {
        let hash = hex::decode(hash_hex).unwrap();
        assert_eq!(
            encode(prefix, script_type, &hash).unwrap(),
            expected.to_ascii_lowercase()
        );
        let decoded = decode(expected).unwrap();
        assert_eq!(decoded.prefix, prefix);
        assert_eq!(decoded.script_type, script_type);
        assert_eq!(decoded.hash, hash);
    }

    #[test]
    fn published_vectors() {
        verify(
            "bitcoincash",
            ScriptType::P2pkh,
            "f5bf48b397dae70be82b3cca4793f8eb2b6cdac9",
            "bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2",
        );
        verify(
            "bchtest",
            ScriptType::P2sh,
            "f5bf48b397dae70be82b3cca4793f8eb2b6cdac9",
            "bchtest:pr6m7j9njldwwzlg9v7v53unlr4jkmx6eyvwc0uz5t",
        );
        verify(
            "pref",
            ScriptType::P2sh,
            "f5bf48b397dae70be82b3cca4793f8eb2b6cdac9",
            "pref:pr6m7j9njldwwzlg9v7v53unlr4jkmx6ey65nvtks5",
        );
    }

    #[test]
    fn longer_hash_vectors() {
        // 32-byte hash on mainnet.
        verify(
            "bitcoincash",
            ScriptType::P2pkh,
            "3173ef6623c6b48ffd1a3dcc0cc6489b0a07bb47a37f47cfef4fe69de825c060",
            "bitcoincash:qvch8mmxy0rtfrlarg7ucrxxfzds5pamg73h7370aa87d80gyhqxq5nlegake",
        );
        // 64-byte hash on testnet.
        verify(
            "bchtest",
            ScriptType::P2sh,
            "d0f346310d5513d9e01e299978624ba883e6bda8f4c60883c10f28c2967e67ec\
             77ecc7eeeaeafc6da89fad72d11ac961e164678b868aeeec5f2c1da08884175b",
            "bchtest:plg0x333p4238k0qrc5ej7rzfw5g8e4a4r6vvzyrcy8j3s5k0en7calvclhw46hudk5\
             flttj6ydvjc0pv3nchp52amk97tqa5zygg96mc773cwez",
        );
    }

    #[test]
    fn uppercase_accepted_and_folded() {
        let decoded =
            decode("BITCOINCASH:QR6M7J9NJLDWWZLG9V7V53UNLR4JKMX6EYLEP8EKG2").unwrap();
        assert_eq!(decoded.prefix, "bitcoincash");
        assert_eq!(decoded.script_type, ScriptType::P2pkh);
        assert_eq!(
            hex::encode(&decoded.hash),
            "f5bf48b397dae70be82b3cca4793f8eb2b6cdac9"
        );
    }

    #[test]
    fn mixed_case_rejected() {
        let err = decode("bitcoincash:Qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2").unwrap_err();
        assert!(matches!(err, CashaddrError::MixedCase));
    }

    #[test]
    fn missing_separator_rejected() {
        let err = decode("qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2").unwrap_err();
        assert!(matches!(err, CashaddrError::MissingSeparator));
        assert!(matches!(
            decode(":qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2").unwrap_err(),
            CashaddrError::MissingSeparator
        ));
    }

    #[test]
    fn double_separator_rejected() {
        // Only the first ':' separates; everything after must be payload.
        let err = decode("bitcoincash:bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2")
            .unwrap_err();
        assert!(matches!(err, CashaddrError::InvalidChar(_)));
        assert!(matches!(
            decode("bitcoincash:qqqq:qqqq").unwrap_err(),
            CashaddrError::InvalidChar(':')
        ));
    }

    #[test]
    fn invalid_characters_rejected() {
        // 'b' and '1' are not in the alphabet; 'é' is not even ASCII.
        assert!(matches!(
            decode("bitcoincash:br6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2").unwrap_err(),
            CashaddrError::InvalidChar('b')
        ));
        assert!(matches!(
            decode("bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg1").unwrap_err(),
            CashaddrError::InvalidChar('1')
        ));
        assert!(matches!(
            decode("bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekgé").unwrap_err(),
            CashaddrError::InvalidChar('é')
        ));
    }

    #[test]
    fn corrupted_checksum_rejected() {
        // Last character changed from 2 to 3.
        let err = decode("bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg3").unwrap_err();
        assert!(matches!(err, CashaddrError::BadChecksum));
    }

    #[test]
    fn truncated_body_rejected() {
        assert!(matches!(
            decode("bitcoincash:").unwrap_err(),
            CashaddrError::TruncatedPayload
        ));
        assert!(matches!(
            decode("bitcoincash:qqqqqqqq").unwrap_err(),
            CashaddrError::TruncatedPayload
        ));
    }

    #[test]
    fn unencodable_hash_lengths_rejected() {
        for len in [0usize, 19, 21, 65] {
            let err = encode("bitcoincash", ScriptType::P2pkh, &vec![0u8; len]).unwrap_err();
            assert!(matches!(err, CashaddrError::UnsupportedHashLength(l) if l == len));
        }
    }

    #[test]
    fn version_byte_size_mismatch_rejected() {
        // Size code 7 claims 64 bytes over a 20-byte hash.
        let text = encode_raw("bitcoincash", 0x07, &[1u8; 20]);
        let err = decode(&text).unwrap_err();
        assert!(matches!(
            err,
            CashaddrError::WrongHashLength {
                expected: 64,
                found: 20
            }
        ));
    }

    #[test]
    fn unknown_type_bits_rejected() {
        let text = encode_raw("bitcoincash", 0x10, &[1u8; 20]);
        let err = decode(&text).unwrap_err();
        assert!(matches!(err, CashaddrError::UnknownScriptType(0x10)));
    }

    #[test]
    fn prefix_participates_in_checksum() {
        // The same payload under a different prefix needs a fresh checksum.
        let err = decode("bchtest:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2").unwrap_err();
        assert!(matches!(err, CashaddrError::BadChecksum));
    }
}
