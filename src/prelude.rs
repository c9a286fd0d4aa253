/*
    This module contains the default imports for the library.

    Import the library using:
        use btc_keyforms::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    key::{
        PubKey,
        PrivKey,
        KeyMaterial,
        Compression,
        Wif,
        KeyError,
        decode_wif
    },
    
    address::{
        Address,
        AddressKind,
        DecodedAddress,
        decode_base58_address
    },

    script::Script,

    report::KeyReport,

    encoding::{
        base58::Base58Error,
        bech32::Bech32Err
    },

    util::Network,

    error::{
        Error,
        Result
    }

};
