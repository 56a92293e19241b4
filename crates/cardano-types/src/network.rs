// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Cardano network selection
//!
//! Blockfrost runs one independent deployment per Cardano network. The
//! [`Network`] type picks the deployment a client talks to.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Cardano networks served by Blockfrost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// Cardano mainnet
    #[default]
    Mainnet,
    /// Cardano public testnet
    Testnet,
}

impl Network {
    /// Select a network from a `testnet` flag
    pub const fn from_testnet_flag(testnet: bool) -> Self {
        if testnet {
            Self::Testnet
        } else {
            Self::Mainnet
        }
    }

    /// Returns the lowercase network name used in Blockfrost hostnames
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }

    /// Returns whether this is a test network
    pub const fn is_testnet(self) -> bool {
        matches!(self, Self::Testnet)
    }

    /// Returns the Blockfrost API base URL for this network, including the
    /// versioned prefix and a trailing slash
    pub fn base_url(self) -> String {
        format!("https://cardano-{}.blockfrost.io/api/v0/", self.name())
    }

    /// Returns all known networks
    pub const fn all() -> &'static [Self] {
        &[Self::Mainnet, Self::Testnet]
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Network {
    type Err = NetworkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            _ => Err(NetworkParseError(s.to_string())),
        }
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_str(&value).map_err(serde::de::Error::custom)
    }
}

/// Error type for network name parsing
#[derive(Debug, thiserror::Error)]
#[error("unsupported network: {0}. Supported networks are: mainnet, testnet")]
pub struct NetworkParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testnet_flag_selects_network() {
        assert_eq!(Network::from_testnet_flag(false), Network::Mainnet);
        assert_eq!(Network::from_testnet_flag(true), Network::Testnet);
        assert_eq!(Network::default(), Network::Mainnet);
    }

    #[test]
    fn base_urls() {
        assert_eq!(
            Network::Mainnet.base_url(),
            "https://cardano-mainnet.blockfrost.io/api/v0/"
        );
        assert_eq!(
            Network::Testnet.base_url(),
            "https://cardano-testnet.blockfrost.io/api/v0/"
        );
    }

    #[test]
    fn network_from_str() {
        assert_eq!(Network::from_str("mainnet").unwrap(), Network::Mainnet);
        assert_eq!(Network::from_str("MAINNET").unwrap(), Network::Mainnet);
        assert_eq!(Network::from_str(" Testnet ").unwrap(), Network::Testnet);

        let err = Network::from_str("preprod").unwrap_err();
        assert!(err.to_string().contains("preprod"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        for &network in Network::all() {
            let serialized = serde_json::to_string(&network).unwrap();
            assert_eq!(serialized, format!("\"{}\"", network.name()));

            let deserialized: Network = serde_json::from_str(&serialized).unwrap();
            assert_eq!(deserialized, network);
        }

        assert!(serde_json::from_str::<Network>("\"devnet\"").is_err());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Network::Mainnet.to_string(), "mainnet");
        assert_eq!(Network::Testnet.to_string(), "testnet");
        assert!(Network::Testnet.is_testnet());
        assert!(!Network::Mainnet.is_testnet());
    }
}
