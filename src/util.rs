use std::{fmt, str::FromStr};
use thiserror::Error;

/*
    Decodes hex strings into a byte vector
*/
pub fn decode_02x(hex: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(hex)
}

/*
    Encodes byte slices into hex string
*/
pub fn encode_02x(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/**
    Network selection.

    This is the only configuration a key needs. It is passed explicitly when a key
    is constructed and decides the version prefixes and Bech32 human readable part.
*/
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Network {
    Bitcoin,
    Testnet
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown network: {0}")]
pub struct UnknownNetwork(pub String);

impl Network {
    pub fn is_testnet(&self) -> bool {
        *self == Network::Testnet
    }

    /// Human readable part of segwit addresses on this network.
    pub fn bech32_hrp(&self) -> &'static str {
        match self {
            Network::Bitcoin => "bc",
            Network::Testnet => "tb"
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::Bitcoin
    }
}

impl From<bool> for Network {
    /// `true` selects testnet.
    fn from(testnet: bool) -> Self {
        if testnet { Network::Testnet } else { Network::Bitcoin }
    }
}

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" | "bitcoin" => Ok(Network::Bitcoin),
            "testnet" | "test" => Ok(Network::Testnet),
            _ => Err(UnknownNetwork(s.to_string()))
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Network::Bitcoin => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet")
        }
    }
}
