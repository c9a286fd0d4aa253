/*
    Module adapts the external bech32 encoder to this crate's
    network and error types.

    The checksum algorithm itself lives in the bitcoin-bech32 crate, this
    module only hands it a witness version and program.
*/
use crate::util::Network;

use bitcoin_bech32::{
    WitnessProgram,
    u5
};
use bitcoin_bech32::constants::Network as Bech32Network;
use thiserror::Error;

/// Highest witness version a segwit output can carry (OP_16).
pub const MAX_WITNESS_VERSION: u8 = 16;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Bech32Err {
    #[error("witness version {0} is out of range")]
    InvalidVersion(u8),

    #[error("bech32 encoder rejected the witness program: {0}")]
    CannotEncode(String)
}

fn to_bech32_network(network: &Network) -> Bech32Network {
    match network {
        Network::Bitcoin => Bech32Network::Bitcoin,
        Network::Testnet => Bech32Network::Testnet
    }
}

fn witness_program(witness_version: u8, data: &[u8], network: &Network) -> Result<WitnessProgram, Bech32Err> {
    if witness_version > MAX_WITNESS_VERSION { return Err(Bech32Err::InvalidVersion(witness_version)) }
    let version = u5::try_from_u8(witness_version)
        .map_err(|_| Bech32Err::InvalidVersion(witness_version))?;

    WitnessProgram::new(
        version,                        //Witness version
        data.to_vec(),                  //Witness program (PubKey hash or script hash)
        to_bech32_network(network)
    ).map_err(|e| Bech32Err::CannotEncode(e.to_string()))
}

/**
    Encodes a witness program into a segwit address.

    Use witness version 0 for P2WPKH and P2WSH.
*/
pub fn encode(witness_version: u8, data: &[u8], network: &Network) -> Result<String, Bech32Err> {
    Ok(witness_program(witness_version, data, network)?.to_address())
}

/**
    Returns the scriptPubKey the external encoder derives for a witness program.
*/
pub fn to_script_pub_key(witness_version: u8, data: &[u8], network: &Network) -> Result<Vec<u8>, Bech32Err> {
    Ok(witness_program(witness_version, data, network)?.to_scriptpubkey())
}
