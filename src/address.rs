use crate::{
    key::{
        Compression,
        KeyMaterial
    },
    encoding::{
        base58::{self, Base58, Base58Error},
        bech32::{self, Bech32Err},
        version_prefix::VersionPrefix,
        ToVersionPrefix
    },
    script::Script,
    util::Network
};
use thiserror::Error;

/// Witness version of P2WPKH programs
const P2WPKH_WITNESS_VERSION: u8 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error(transparent)]
    Base58(#[from] Base58Error),

    #[error("version byte 0x{0:02x} is not an address prefix")]
    UnknownVersion(u8),

    #[error("address hash is {0} bytes, expected 20")]
    InvalidLength(usize)
}

/// The kinds of Base58Check address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    P2PKH,
    P2SH
}

/// A Base58Check address taken apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedAddress {
    pub kind: AddressKind,
    pub network: Network,
    pub hash: [u8; 20]
}

pub struct Address;

impl Address {
    /**
        Creates a legacy address from a public key hash.
        * Base58Check( version | Hash160( Public Key ) )
    */
    pub fn p2pkh(pubkey_hash: &[u8; 20], network: Network) -> String {
        Base58::new(Some(network.p2pkh_prefix()), pubkey_hash).check_encode()
    }

    /**
        Creates a P2SH address from a script
    */
    pub fn p2sh(script: &Script, network: Network) -> String {
        Base58::new(Some(network.p2sh_prefix()), &script.hash()).check_encode()
    }

    /**
        Creates a P2WPKH address from a public key hash
    */
    pub fn p2wpkh(pubkey_hash: &[u8; 20], network: Network) -> Result<String, Bech32Err> {
        bech32::encode(P2WPKH_WITNESS_VERSION, pubkey_hash, &network)
    }

    /**
        Verifies that an address is valid by checking the payload and checksum
    */
    pub fn is_valid(address: &str) -> bool {
        decode_base58_address(address).is_ok()
    }
}

/**
    Decodes a P2PKH or P2SH address into its kind, network and hash.
*/
pub fn decode_base58_address(address: &str) -> Result<DecodedAddress, AddressError> {
    let body = base58::check_decode(address)?;

    let version = body[0];
    let prefix = VersionPrefix::from_int(version).ok_or(AddressError::UnknownVersion(version))?;
    let kind = match prefix {
        VersionPrefix::BTCAddress | VersionPrefix::BTCTestNetAddress => AddressKind::P2PKH,
        VersionPrefix::P2ScriptAddress | VersionPrefix::TestnetP2SHAddress => AddressKind::P2SH,
        _ => return Err(AddressError::UnknownVersion(version))
    };

    let payload = &body[1..];
    if payload.len() != 20 { return Err(AddressError::InvalidLength(payload.len())) }
    let mut hash = [0; 20];
    hash.copy_from_slice(payload);

    Ok(DecodedAddress { kind, network: prefix.network(), hash })
}

/*
    Addresses derived from a key, on the key's network.
*/
impl KeyMaterial {
    pub fn legacy_address(&self, compression: Compression) -> String {
        Address::p2pkh(&self.public_key_hash(compression), self.network())
    }

    pub fn segwit_compat_address(&self) -> String {
        Address::p2sh(&self.segwit_redeem_script(), self.network())
    }

    pub fn native_segwit_address(&self) -> Result<String, Bech32Err> {
        Address::p2wpkh(&self.public_key_hash(Compression::Compressed), self.network())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::PrivKey;

    fn key(scalar: u64, network: Network) -> KeyMaterial {
        KeyMaterial::new(PrivKey::from_u64(scalar), network).unwrap()
    }

    #[test]
    fn legacy_addresses() {
        let k = key(1, Network::Bitcoin);
        assert_eq!(k.legacy_address(Compression::Compressed), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
        assert_eq!(k.legacy_address(Compression::Uncompressed), "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm");

        let k = key(12345, Network::Bitcoin);
        assert_eq!(k.legacy_address(Compression::Compressed), "12vieiAHxBe4qCUrwvfb2kRkDuc8kQ2VZ2");

        let k = key(1, Network::Testnet);
        assert_eq!(k.legacy_address(Compression::Compressed), "mrCDrCybB6J1vRfbwM5hemdJz73FwDBC8r");
    }

    #[test]
    fn segwit_addresses() {
        let k = key(1, Network::Bitcoin);
        assert_eq!(k.segwit_compat_address(), "3JvL6Ymt8MVWiCNHC7oWU6nLeHNJKLZGLN");
        assert_eq!(k.native_segwit_address().unwrap(), "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");

        let k = key(1, Network::Testnet);
        assert_eq!(k.segwit_compat_address(), "2NAUYAHhujozruyzpsFRP63mbrdaU5wnEpN");
        assert_eq!(k.native_segwit_address().unwrap(), "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx");
    }

    #[test]
    fn decode_mainnet_p2pkh_keeps_leading_zero_version() {
        let decoded = decode_base58_address("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH").unwrap();
        assert_eq!(decoded.kind, AddressKind::P2PKH);
        assert_eq!(decoded.network, Network::Bitcoin);
        assert_eq!(hex::encode(decoded.hash), "751e76e8199196d454941c45d1b3a323f1433bd6");
    }

    #[test]
    fn decode_p2sh_addresses() {
        let decoded = decode_base58_address("2NAUYAHhujozruyzpsFRP63mbrdaU5wnEpN").unwrap();
        assert_eq!(decoded.kind, AddressKind::P2SH);
        assert_eq!(decoded.network, Network::Testnet);
        assert_eq!(hex::encode(decoded.hash), "bcfeb728b584253d5f3f70bcb780e9ef218a68f4");
    }

    #[test]
    fn wif_is_not_an_address() {
        assert_eq!(
            decode_base58_address("KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn"),
            Err(AddressError::UnknownVersion(0x80))
        );
        assert!(!Address::is_valid("KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn"));
    }

    #[test]
    fn validity() {
        assert!(Address::is_valid("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"));
        assert!(Address::is_valid("3BEqJ8hzdNhtknPpkNQcB7VS86Vqm7qy5r"));
        assert!(!Address::is_valid("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNb"));
        assert!(!Address::is_valid("1A1zP1eP5QGefi2DMPTfTL5SLmv7Divf0a"));
    }
}
