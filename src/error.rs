use crate::{
    address::AddressError,
    encoding::{
        base58::Base58Error,
        bech32::Bech32Err
    },
    key::KeyError,
    util::UnknownNetwork
};
use thiserror::Error;

/// Any error the library can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Base58(#[from] Base58Error),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Bech32(#[from] Bech32Err),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Network(#[from] UnknownNetwork)
}

pub type Result<T> = std::result::Result<T, Error>;
