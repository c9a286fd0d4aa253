/*
    Library that derives every standard representation of a
    Bitcoin private key: WIF, legacy (P2PKH) address and script,
    P2SH wrapped segwit address and script, and native segwit
    address and script, for mainnet and testnet.

    References:
        - The Bitcoin Book (https://github.com/bitcoinbook/bitcoinbook/)
            most of the general concepts come from here
        
        - learn me a bitcoin (https://learnmeabitcoin.com/)
            for great visualisation of the concepts inroduced in the book

    Usage:
        let key = KeyMaterial::new(PrivKey::from_u64(1), Network::Bitcoin)?;
        key.legacy_address(Compression::Compressed);   // 1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH
*/

//Outward facing modules
pub mod key;
pub mod address;
pub mod script;
pub mod encoding;
pub mod report;
pub mod error;
pub mod prelude;
pub mod util;
pub mod hash;

pub use error::{Error, Result};

//Dependencies
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use sha2::{Sha256, Digest};
use ripemd160::Ripemd160;
