//! Network identifier.

use serde::{Deserialize, Serialize};

/// Identifies which Bitcoin Cash network an address belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    /// The production network.
    Mainnet,
    /// The public test network.
    Testnet,
}

impl Network {
    /// The cashaddr prefix written in front of addresses on this network.
    ///
    /// Regtest addresses carry a distinct `regtest` prefix on the wire but
    /// share testnet's version bytes, so they re-encode under `bchtest`.
    pub fn cashaddr_prefix(&self) -> &'static str {
        match self {
            Self::Mainnet => "bitcoincash",
            Self::Testnet => "bchtest",
        }
    }

    /// Maps a cashaddr prefix back to its network.
    ///
    /// Accepts `regtest` as an alias for the test network; returns `None` for
    /// anything else, including prefixes that differ only in case.
    pub fn from_cashaddr_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "bitcoincash" => Some(Self::Mainnet),
            "bchtest" | "regtest" => Some(Self::Testnet),
            _ => None,
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_round_trip() {
        assert_eq!(
            Network::from_cashaddr_prefix(Network::Mainnet.cashaddr_prefix()),
            Some(Network::Mainnet)
        );
        assert_eq!(
            Network::from_cashaddr_prefix(Network::Testnet.cashaddr_prefix()),
            Some(Network::Testnet)
        );
    }

    #[test]
    fn regtest_maps_to_testnet() {
        assert_eq!(
            Network::from_cashaddr_prefix("regtest"),
            Some(Network::Testnet)
        );
    }

    #[test]
    fn unknown_prefixes_rejected() {
        assert_eq!(Network::from_cashaddr_prefix("bitcoin"), None);
        assert_eq!(Network::from_cashaddr_prefix("Bitcoincash"), None);
        assert_eq!(Network::from_cashaddr_prefix(""), None);
    }
}
