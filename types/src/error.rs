//! The single error surfaced by address translation.

use thiserror::Error;

/// Returned whenever a string cannot be understood as a Bitcoin Cash address
/// in any supported format.
///
/// Carries the offending input and nothing else. Which scheme rejected the
/// string first is not reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid address: {0}")]
pub struct InvalidAddressError(pub String);

impl InvalidAddressError {
    /// The input string that failed to decode.
    pub fn input(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_input() {
        let err = InvalidAddressError("not-an-address".to_string());
        assert_eq!(err.to_string(), "invalid address: not-an-address");
        assert_eq!(err.input(), "not-an-address");
    }
}
