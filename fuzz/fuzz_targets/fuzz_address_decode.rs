#![no_main]

use libfuzzer_sys::fuzz_target;

// Decode arbitrary strings as addresses. No input may panic the decoder, and
// anything that decodes must translate to legacy and re-decode to the same
// value.
fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    let decoded = match bchaddr_codec::decode_address(input) {
        Ok(decoded) => decoded,
        Err(_) => {
            // The conversions run the same trials, so they must agree.
            assert!(bchaddr_codec::to_legacy_address(input).is_err());
            assert!(bchaddr_codec::to_cash_address(input).is_err());
            return;
        }
    };

    // Legacy encoding accepts any hash length, so this direction never fails.
    let legacy = bchaddr_codec::to_legacy_address(input).unwrap();
    let redecoded = bchaddr_codec::decode_address(&legacy).unwrap();
    assert_eq!(redecoded.hash, decoded.hash);
    assert_eq!(redecoded.network, decoded.network);
    assert_eq!(redecoded.script_type, decoded.script_type);

    // The cashaddr direction can reject unencodable hash lengths, but when it
    // produces a string that string must decode to the same value.
    if let Ok(cash) = bchaddr_codec::to_cash_address(input) {
        let redecoded = bchaddr_codec::decode_address(&cash).unwrap();
        assert_eq!(redecoded.hash, decoded.hash);
        assert_eq!(redecoded.network, decoded.network);
        assert_eq!(redecoded.script_type, decoded.script_type);
    }
});
