use crate::{
    Secp256k1,
    PublicKey,
    SecretKey,
    hash,
    encoding::{
        base58::{self, Base58, Base58Error},
        version_prefix::VersionPrefix,
        ToVersionPrefix
    },
    util::{
        encode_02x,
        Network
    }
};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Byte appended to a WIF payload when the key maps to a compressed public key.
const WIF_COMPRESSION_FLAG: u8 = 0x01;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("private key scalar is out of range for secp256k1")]
    InvalidScalar,

    #[error("private key is not valid hex")]
    InvalidHex,

    #[error("unknown WIF version byte 0x{0:02x}")]
    UnknownVersion(u8),

    #[error("WIF payload of {0} bytes is neither a compressed nor an uncompressed key")]
    InvalidWifLength(usize),

    #[error(transparent)]
    Base58(#[from] Base58Error)
}

/// Which serialization of the public key an output is derived from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Compression {
    Compressed,
    Uncompressed
}

impl Compression {
    pub fn is_compressed(&self) -> bool {
        *self == Compression::Compressed
    }
}

impl From<bool> for Compression {
    fn from(compressed: bool) -> Self {
        if compressed { Compression::Compressed } else { Compression::Uncompressed }
    }
}

/**
    A private key scalar in its canonical 32 byte big-endian form.

    The scalar is only range checked when it is handed to the curve in
    `KeyMaterial::new`.
*/
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivKey([u8; 32]);

impl PrivKey {
    /**
        Use a big-endian unsigned integer of any length as a private key.

        Leading zero bytes are ignored. Anything wider than 256 bits cannot be a
        secp256k1 scalar.
    */
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let significant: Vec<u8> = bytes.iter().copied().skip_while(|b| *b == 0).collect();
        if significant.len() > 32 { return Err(KeyError::InvalidScalar) }

        let mut scalar = [0; 32];
        scalar[32 - significant.len()..].copy_from_slice(&significant);
        Ok(Self(scalar))
    }

    pub fn from_u64(int: u64) -> Self {
        let mut scalar = [0; 32];
        scalar[24..].copy_from_slice(&int.to_be_bytes());
        Self(scalar)
    }

    /// Parses a hex encoded scalar. An odd number of digits is left padded.
    pub fn from_hex(hex: &str) -> Result<Self, KeyError> {
        let padded = if hex.len() % 2 == 1 { format!("0{}", hex) } else { hex.to_string() };
        let bytes = hex::decode(padded).map_err(|_| KeyError::InvalidHex)?;
        Self::from_be_bytes(&bytes)
    }

    /// Serializes the private key into a array of bytes.
    pub fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    pub fn as_hex(&self) -> String {
        encode_02x(&self.0)
    }

    /**
        Export the private key in wallet-import-format (Base58Check Encoded with prefix)
        * Use the parameter to indicate if WIF should include the compression byte.
    */
    pub fn export_as_wif(&self, network: Network, compression: Compression) -> String {
        let mut key: Vec<u8> = self.0.to_vec();
        if compression.is_compressed() {
            key.push(WIF_COMPRESSION_FLAG);
        }

        Base58::new(Some(network.wif_prefix()), &key).check_encode()
    }
}

impl fmt::Debug for PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        //Never print the scalar itself
        f.write_str("PrivKey(..)")
    }
}

/// A private key read back out of wallet-import-format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wif {
    pub key: PrivKey,
    pub network: Network,
    pub compression: Compression
}

/**
    Decodes a WIF string.

    The checksum, version byte and payload length are validated before anything
    is read from the payload. Network and compression come from the validated
    bytes, not from the leading character.
*/
pub fn decode_wif(wif: &str) -> Result<Wif, KeyError> {
    let body = base58::check_decode(wif)?;

    //Checksummed body is never empty
    let version = body[0];
    let network = match VersionPrefix::from_int(version) {
        Some(p @ VersionPrefix::PrivateKeyWIF) | Some(p @ VersionPrefix::TestNetPrivateKeyWIF) => p.network(),
        _ => return Err(KeyError::UnknownVersion(version))
    };

    let payload = &body[1..];
    let compression = match payload.len() {
        32 => Compression::Uncompressed,
        33 if payload[32] == WIF_COMPRESSION_FLAG => Compression::Compressed,
        len => return Err(KeyError::InvalidWifLength(len))
    };

    let mut scalar = [0; 32];
    scalar.copy_from_slice(&payload[..32]);

    Ok(Wif { key: PrivKey(scalar), network, compression })
}

/**
    The public key point of a private key, stored as its two 32 byte coordinates.
*/
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PubKey {
    x: [u8; 32],
    y: [u8; 32]
}

impl PubKey {
    /**
        Finds the public key of a private key.

        Is the result of static point G on the secp256k1 curve multipled k times, where k is the private key.
        Fails if k is zero or not below the curve order.
    */
    pub fn from_priv_key(k: &PrivKey) -> Result<Self, KeyError> {
        let secret = SecretKey::from_slice(&k.0).map_err(|_| KeyError::InvalidScalar)?;
        let point = PublicKey::from_secret_key(&Secp256k1::signing_only(), &secret).serialize_uncompressed();

        //point = 0x04 | x | y
        let mut x = [0; 32];
        let mut y = [0; 32];
        x.copy_from_slice(&point[1..33]);
        y.copy_from_slice(&point[33..65]);

        Ok(Self { x, y })
    }

    pub fn x(&self) -> [u8; 32] {
        self.x
    }

    pub fn y(&self) -> [u8; 32] {
        self.y
    }

    /**
        Serializes the public key.
        * Compressed: 0x02 or 0x03 depending on the parity of y, then x
        * Uncompressed: 0x04, x, then y
    */
    pub fn as_bytes(&self, compression: Compression) -> Vec<u8> {
        match compression {
            Compression::Compressed => {
                let mut bytes = Vec::with_capacity(33);
                bytes.push(if self.y[31] % 2 == 0 { 0x02 } else { 0x03 });
                bytes.extend_from_slice(&self.x);
                bytes
            },
            Compression::Uncompressed => {
                let mut bytes = Vec::with_capacity(65);
                bytes.push(0x04);
                bytes.extend_from_slice(&self.x);
                bytes.extend_from_slice(&self.y);
                bytes
            }
        }
    }

    pub fn as_hex(&self, compression: Compression) -> String {
        encode_02x(&self.as_bytes(compression))
    }

    /// Hash160 of the serialized public key.
    pub fn hash160(&self, compression: Compression) -> [u8; 20] {
        hash::hash160(self.as_bytes(compression))
    }
}

impl fmt::Debug for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PubKey({})", self.as_hex(Compression::Compressed))
    }
}

impl fmt::Display for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_hex(Compression::Compressed))
    }
}

/**
    A private key, its public key and the network it is used on.

    Built once and never changed. Every address, script and WIF is computed from
    it on demand.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMaterial {
    private: PrivKey,
    public: PubKey,
    network: Network
}

impl KeyMaterial {
    pub fn new(private: PrivKey, network: Network) -> Result<Self, KeyError> {
        let public = PubKey::from_priv_key(&private)?;
        debug!(%network, "derived key material");

        Ok(Self { private, public, network })
    }

    /// Rebuilds key material from a WIF string, on the network the WIF names.
    pub fn from_wif(wif: &str) -> Result<(Self, Compression), KeyError> {
        let decoded = decode_wif(wif)?;
        Ok((Self::new(decoded.key, decoded.network)?, decoded.compression))
    }

    pub fn private_key(&self) -> &PrivKey {
        &self.private
    }

    pub fn public_key(&self) -> &PubKey {
        &self.public
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn public_key_bytes(&self, compression: Compression) -> Vec<u8> {
        self.public.as_bytes(compression)
    }

    pub fn public_key_hash(&self, compression: Compression) -> [u8; 20] {
        self.public.hash160(compression)
    }

    pub fn wif(&self, compression: Compression) -> String {
        self.private.export_as_wif(self.network, compression)
    }
}
