use crate::{
    util::Network
};

/// One byte version prefixes placed in front of Base58Check payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPrefix {
    BTCAddress = 0x00,
    BTCTestNetAddress = 0x6F,
    P2ScriptAddress = 0x05,
    TestnetP2SHAddress = 0xC4,
    PrivateKeyWIF = 0x80,
    TestNetPrivateKeyWIF = 0xEF
}

impl VersionPrefix {
    pub fn to_byte(&self) -> u8 {
        *self as u8
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        vec![self.to_byte()]
    }

    pub fn from_int(int: u8) -> Option<Self> {
        Some(match int {
            0x00 => Self::BTCAddress,
            0x6F => Self::BTCTestNetAddress,
            0x05 => Self::P2ScriptAddress,
            0xC4 => Self::TestnetP2SHAddress,
            0x80 => Self::PrivateKeyWIF,
            0xEF => Self::TestNetPrivateKeyWIF,
            _ => return None
        })
    }

    /// The network this prefix belongs to.
    pub fn network(&self) -> Network {
        match self {
            Self::BTCAddress | Self::P2ScriptAddress | Self::PrivateKeyWIF => Network::Bitcoin,
            Self::BTCTestNetAddress | Self::TestnetP2SHAddress | Self::TestNetPrivateKeyWIF => Network::Testnet
        }
    }
}

/// Maps a network onto the version prefixes used for each kind of payload.
pub trait ToVersionPrefix {
    fn wif_prefix(&self) -> VersionPrefix;
    fn p2pkh_prefix(&self) -> VersionPrefix;
    fn p2sh_prefix(&self) -> VersionPrefix;
}

impl ToVersionPrefix for Network {
    fn wif_prefix(&self) -> VersionPrefix {
        match self {
            Network::Bitcoin => VersionPrefix::PrivateKeyWIF,
            Network::Testnet => VersionPrefix::TestNetPrivateKeyWIF
        }
    }

    fn p2pkh_prefix(&self) -> VersionPrefix {
        match self {
            Network::Bitcoin => VersionPrefix::BTCAddress,
            Network::Testnet => VersionPrefix::BTCTestNetAddress
        }
    }

    fn p2sh_prefix(&self) -> VersionPrefix {
        match self {
            Network::Bitcoin => VersionPrefix::P2ScriptAddress,
            Network::Testnet => VersionPrefix::TestnetP2SHAddress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_prefix_table() {
        assert_eq!(Network::Bitcoin.wif_prefix().to_byte(), 0x80);
        assert_eq!(Network::Bitcoin.p2pkh_prefix().to_byte(), 0x00);
        assert_eq!(Network::Bitcoin.p2sh_prefix().to_byte(), 0x05);
        assert_eq!(Network::Testnet.wif_prefix().to_byte(), 0xEF);
        assert_eq!(Network::Testnet.p2pkh_prefix().to_byte(), 0x6F);
        assert_eq!(Network::Testnet.p2sh_prefix().to_byte(), 0xC4);
    }

    #[test]
    fn prefixes_round_trip_through_their_byte() {
        for network in [Network::Bitcoin, Network::Testnet].iter() {
            for prefix in [network.wif_prefix(), network.p2pkh_prefix(), network.p2sh_prefix()].iter() {
                assert_eq!(VersionPrefix::from_int(prefix.to_byte()), Some(*prefix));
                assert_eq!(prefix.network(), *network);
            }
        }
        assert_eq!(VersionPrefix::from_int(0x42), None);
    }
}
