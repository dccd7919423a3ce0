//! Address encoding formats.

use serde::{Deserialize, Serialize};

/// The two wire encodings a Bitcoin Cash address can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressFormat {
    /// Base58Check encoding inherited from Bitcoin ("1...", "3...", "m...", ...).
    Legacy,
    /// The bech32-style encoding Bitcoin Cash introduced
    /// ("bitcoincash:q...", "bchtest:p...", ...).
    Cashaddr,
}

impl AddressFormat {
    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Cashaddr => "cashaddr",
        }
    }
}

impl std::fmt::Display for AddressFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
