/*
    Standard output scripts (scriptPubKeys) for a single key:
        - P2PKH:        OP_DUP OP_HASH160 <pubkey hash> OP_EQUALVERIFY OP_CHECKSIG
        - P2SH-P2WPKH:  OP_HASH160 <redeem script hash> OP_EQUAL
        - P2WPKH:       OP_0 <pubkey hash>
*/

pub mod builder;

pub use builder::{
    Builder as ScriptBuilder,
    Opcode,
    opcodes
};

use crate::{
    hash,
    key::{
        Compression,
        KeyMaterial
    },
    util::encode_02x
};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub code: Vec<u8>
}

impl Script {
    /**
        Create a new instance of self
    */
    pub fn new(code: Vec<u8>) -> Self {
        Self {
            code
        }
    }

    /**
        Hash the script with Hash160
    */
    pub fn hash(&self) -> [u8; 20] {
        hash::hash160(&self.code)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.code
    }

    pub fn as_hex(&self) -> String {
        encode_02x(&self.code)
    }

    /// Pay to public key hash
    pub fn p2pkh(pubkey_hash: &[u8; 20]) -> Self {
        ScriptBuilder::new()
            .push_opcode(opcodes::OP_DUP)
            .push_opcode(opcodes::OP_HASH160)
            .push_hash160(pubkey_hash)
            .push_opcode(opcodes::OP_EQUALVERIFY)
            .push_opcode(opcodes::OP_CHECKSIG)
            .into_script()
    }

    /// Pay to script hash
    pub fn p2sh(script_hash: &[u8; 20]) -> Self {
        ScriptBuilder::new()
            .push_opcode(opcodes::OP_HASH160)
            .push_hash160(script_hash)
            .push_opcode(opcodes::OP_EQUAL)
            .into_script()
    }

    /// Version 0 witness program over a public key hash
    pub fn p2wpkh(pubkey_hash: &[u8; 20]) -> Self {
        ScriptBuilder::new()
            .push_opcode(opcodes::OP_0)
            .push_hash160(pubkey_hash)
            .into_script()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

/*
    Scripts derived from a key. Segwit scripts always commit to the compressed public key.
*/
impl KeyMaterial {
    pub fn legacy_script(&self, compression: Compression) -> Script {
        Script::p2pkh(&self.public_key_hash(compression))
    }

    /// The P2WPKH program that a P2SH-P2WPKH output wraps.
    pub fn segwit_redeem_script(&self) -> Script {
        Script::p2wpkh(&self.public_key_hash(Compression::Compressed))
    }

    pub fn segwit_compat_script(&self) -> Script {
        Script::p2sh(&self.segwit_redeem_script().hash())
    }

    pub fn native_segwit_script(&self) -> Script {
        Script::p2wpkh(&self.public_key_hash(Compression::Compressed))
    }
}
