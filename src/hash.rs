/*
    Hash module includes the hash functions necessary to hash
    public keys and scripts into addresses and to checksum
    Base58Check payloads.
*/

use crate::{
    Ripemd160, Sha256, Digest
};

/*
    Takes in a byte array and returns the ripemd160 hash of it as a 20 byte array
*/
pub fn ripemd160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    let mut r = Ripemd160::new();
    r.update(input);

    let mut hash = [0; 20];
    hash.copy_from_slice(&r.finalize());
    hash
}

/*
    Takes in a byte array and returns the sha256 hash of it as a 32 byte array
*/
pub fn sha256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut r = Sha256::new();
    r.update(input);

    let mut hash = [0; 32];
    hash.copy_from_slice(&r.finalize());
    hash
}

/// Ripemd160( Sha256( input ) )
pub fn hash160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    ripemd160(sha256(input))
}

/// Sha256( Sha256( input ) )
pub fn hash256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    sha256(sha256(input))
}
