/*
    Gathers every representation of a single key into one value.
*/

use crate::{
    encoding::{
        base58::to_base_digits,
        bech32::Bech32Err
    },
    key::{
        Compression,
        KeyMaterial
    },
    util::{
        encode_02x,
        Network
    }
};
use std::fmt;

/// Address, WIF and scriptPubKey of one output type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputForms {
    pub address: String,
    pub wif: String,
    pub script: String
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyReport {
    pub network: Network,
    pub private_hex: String,
    pub private_binary: String,
    pub private_decimal: String,
    pub public_uncompressed: String,
    pub public_uncompressed_hash: String,
    pub public_compressed: String,
    pub public_compressed_hash: String,
    pub legacy_uncompressed: OutputForms,
    pub legacy_compressed: OutputForms,
    pub segwit_compat: OutputForms,
    pub native_segwit: OutputForms
}

/// Renders big-endian bytes as an integer in base 2 or 10, without leading zeroes.
fn digits(bytes: &[u8], base: usize) -> String {
    let digits = to_base_digits(bytes, base);
    if digits.is_empty() {
        return "0".to_string();
    }
    digits.iter().map(|d| (b'0' + d) as char).collect()
}

impl KeyReport {
    pub fn new(key: &KeyMaterial) -> Result<Self, Bech32Err> {
        let scalar = key.private_key().as_bytes();
        let wif = key.wif(Compression::Compressed);

        Ok(Self {
            network: key.network(),
            private_hex: encode_02x(&scalar),
            private_binary: digits(&scalar, 2),
            private_decimal: digits(&scalar, 10),
            public_uncompressed: encode_02x(&key.public_key_bytes(Compression::Uncompressed)),
            public_uncompressed_hash: encode_02x(&key.public_key_hash(Compression::Uncompressed)),
            public_compressed: encode_02x(&key.public_key_bytes(Compression::Compressed)),
            public_compressed_hash: encode_02x(&key.public_key_hash(Compression::Compressed)),
            legacy_uncompressed: OutputForms {
                address: key.legacy_address(Compression::Uncompressed),
                wif: key.wif(Compression::Uncompressed),
                script: key.legacy_script(Compression::Uncompressed).as_hex()
            },
            legacy_compressed: OutputForms {
                address: key.legacy_address(Compression::Compressed),
                wif: wif.clone(),
                script: key.legacy_script(Compression::Compressed).as_hex()
            },
            segwit_compat: OutputForms {
                address: key.segwit_compat_address(),
                wif: wif.clone(),
                script: key.segwit_compat_script().as_hex()
            },
            native_segwit: OutputForms {
                address: key.native_segwit_address()?,
                wif,
                script: key.native_segwit_script().as_hex()
            }
        })
    }
}

impl fmt::Display for OutputForms {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "Privkey: {}", self.wif)?;
        writeln!(f, " Script: {}", self.script)
    }
}

impl fmt::Display for KeyReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[Raw private key]")?;
        writeln!(f, "Hex:\n{}", self.private_hex)?;
        writeln!(f, "Binary:\n{}", self.private_binary)?;
        writeln!(f, "Decimal:\n{}\n", self.private_decimal)?;

        writeln!(f, "[Public key]")?;
        writeln!(f, "Uncompressed:\n{}", self.public_uncompressed)?;
        writeln!(f, "Hash:\n{}\n", self.public_uncompressed_hash)?;
        writeln!(f, "Compressed:\n{}", self.public_compressed)?;
        writeln!(f, "Hash:\n{}\n", self.public_compressed_hash)?;

        writeln!(f, "[Legacy uncompressed]\n{}", self.legacy_uncompressed)?;
        writeln!(f, "[Legacy compressed]\n{}", self.legacy_compressed)?;
        writeln!(f, "[P2SH-Segwit]\n{}", self.segwit_compat)?;
        writeln!(f, "[SegWit]\n{}", self.native_segwit)
    }
}
