use crate::{
    encoding::{
        version_prefix::VersionPrefix
    },
    hash
};
use thiserror::Error;
use tracing::trace;

const BASE58_ALPHABET: &'static [u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const MAP_BASE58: [i8; 256] = [
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1, 0, 1, 2, 3, 4, 5, 6,  7, 8,-1,-1,-1,-1,-1,-1,
        -1, 9,10,11,12,13,14,15, 16,-1,17,18,19,20,21,-1,
        22,23,24,25,26,27,28,29, 30,31,32,-1,-1,-1,-1,-1,
        -1,33,34,35,36,37,38,39, 40,41,42,43,-1,44,45,46,
        47,48,49,50,51,52,53,54, 55,56,57,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
];

/// Length of the double sha256 checksum appended by Base58Check.
pub const CHECKSUM_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base58Error {
    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("decoded payload is {0} bytes, too short to hold a checksum")]
    InputTooShort(usize),

    #[error("checksum mismatch: expected {}, found {}", hex::encode(.expected), hex::encode(.found))]
    ChecksumMismatch { expected: [u8; 4], found: [u8; 4] }
}

#[derive(Debug)]
pub struct Base58 {
    prefix: Option<VersionPrefix>,
    payload: Vec<u8>
}

impl Base58 {
    pub fn new(prefix: Option<VersionPrefix>, payload: &[u8]) -> Base58 {
        Base58 {
            prefix,
            payload: payload.to_vec()
        }
    }

    /// Concatenation of the version prefix (if any) and the payload.
    fn versioned_payload(self) -> Vec<u8> {
        match self.prefix {
            Some(x) => {
                let mut d = x.to_bytes();
                d.extend_from_slice(&self.payload);
                d
            },
            None => self.payload
        }
    }

    /// Check encode data by appending the checksum and then encoding it.
    pub fn check_encode(self) -> String {
        //prefix | payload | checksum
        let mut bytes = self.versioned_payload();
        let checksum = checksum(&bytes);
        bytes.extend_from_slice(&checksum);

        encode(&bytes)
    }

    /// Encode data in base58 format without a checksum.
    pub fn encode(self) -> String {
        encode(&self.versioned_payload())
    }

    /// Checks if a base58 check encoded string is valid
    pub fn validate_checksum(encoded: &str) -> Result<bool, Base58Error> {
        match check_decode(encoded) {
            Ok(_) => Ok(true),
            Err(Base58Error::ChecksumMismatch { .. }) => Ok(false),
            Err(e) => Err(e)
        }
    }

    /// Returns the decoded payload with the checksum removed.
    /// Version prefix is NOT removed as it is variable length depending on context.
    pub fn check_decode(encoded: &str) -> Result<Vec<u8>, Base58Error> {
        check_decode(encoded)
    }
}

/// First four bytes of Hash256(data)
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut c = [0; CHECKSUM_LEN];
    c.copy_from_slice(&hash::hash256(data)[..CHECKSUM_LEN]);
    c
}

/// Converts a big-endian base 256 number into big-endian digits of `base`.
/// Leading zero bytes are dropped, so an all zero input yields no digits.
pub(crate) fn to_base_digits(data: &[u8], base: usize) -> Vec<u8> {
    let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 138 / 100 + 1);

    for &byte in data.iter().skip_while(|b| **b == 0) {
        //Multiply the accumulated digits by 256 and add the byte, one digit at a time.
        //    digit = (digit*256 + carry) % base    |   carry = (digit*256 + carry) / base
        let mut carry = byte as usize;
        for digit in digits.iter_mut() {
            let n = *digit as usize * 256 + carry;
            *digit = (n % base) as u8;
            carry = n / base;
        }

        while carry > 0 {
            digits.push((carry % base) as u8);
            carry /= base;
        }
    }

    //Digits were accumulated least significant first
    digits.reverse();
    digits
}

/**
    Encodes bytes in base58.

    The payload is treated as a big-endian unsigned integer. Every leading zero
    byte of the input is emitted as a leading '1' since it vanishes from the integer.
*/
pub fn encode(data: &[u8]) -> String {
    let zeroes = data.iter().take_while(|b| **b == 0).count();

    let mut result = String::with_capacity(zeroes + data.len() * 138 / 100 + 1);
    for _ in 0..zeroes {
        result.push('1');
    }
    for digit in to_base_digits(data, 58) {
        result.push(BASE58_ALPHABET[digit as usize] as char);
    }

    result
}

/**
    Decodes a base58 string into a byte vector.
    DOES NOT remove the checksum or version prefix if present.

    Each leading '1' becomes a leading zero byte so that decode(encode(x)) == x.
*/
pub fn decode(encoded: &str) -> Result<Vec<u8>, Base58Error> {
    //Allocate enough space in big-endian base256 representation.
    let size = encoded.len() * 733 / 1000 + 1; // log(58) / log(256), rounded up.
    let mut b256: Vec<u8> = vec![0; size];

    let mut zeroes = 0;
    let mut leading = true;
    for (index, character) in encoded.chars().enumerate() {
        let digit = if character.is_ascii() { MAP_BASE58[character as usize] } else { -1 };
        if digit == -1 {
            trace!(index, "base58 decode hit an invalid character");
            return Err(Base58Error::InvalidCharacter { character, index });
        }

        if leading && digit == 0 {
            zeroes += 1;
            continue;
        }
        leading = false;

        //value = value*58 + digit
        let mut carry = digit as u32;
        for byte in b256.iter_mut().rev() {
            carry += 58 * (*byte as u32);
            *byte = (carry % 256) as u8;
            carry /= 256;
        }
    }

    //Minimal big-endian form, then restore the zero bytes the '1's stood for.
    let significant = b256.iter().skip_while(|b| **b == 0);
    let mut result: Vec<u8> = vec![0; zeroes];
    result.extend(significant);

    Ok(result)
}

/**
    Decodes a Base58Check string and verifies its checksum.

    Returns the body (version prefix | payload) with the checksum stripped.
*/
pub fn check_decode(encoded: &str) -> Result<Vec<u8>, Base58Error> {
    let mut bytes = decode(encoded)?;
    if bytes.len() <= CHECKSUM_LEN {
        trace!(len = bytes.len(), "base58check payload too short");
        return Err(Base58Error::InputTooShort(bytes.len()));
    }

    let body_len = bytes.len() - CHECKSUM_LEN;
    let mut found = [0; CHECKSUM_LEN];
    found.copy_from_slice(&bytes[body_len..]);
    let expected = checksum(&bytes[..body_len]);

    if expected != found {
        trace!("base58check checksum mismatch");
        return Err(Base58Error::ChecksumMismatch { expected, found });
    }

    bytes.truncate(body_len);
    Ok(bytes)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Tests encoding of data without checksum
    /// Sourced from https://tools.ietf.org/id/draft-msporny-base58-01.html
    fn base58_ietf_test_vectors() {
        let hello_world = b"Hello World!";
        let fox = b"The quick brown fox jumps over the lazy dog.";
        let int = [0x00, 0x00, 0x28, 0x7f, 0xb4, 0xcd];

        assert_eq!(Base58::new(None, hello_world).encode(), "2NEpo7TZRRrLZSi2U");
        assert_eq!(Base58::new(None, fox).encode(), "USm3fpXnKG5EUBx2ndxBDMPVciP5hGey2Jh4NDv6gmeo1LkMeiKrLJUUBk6Z");
        assert_eq!(Base58::new(None, &int).encode(), "11233QC4");
    }

    #[test]
    /// Sourced from the Bitcoin Core repository (https://github.com/bitcoin/bitcoin/blob/master/src/test/data/base58_encode_decode.json)
    fn base58_bitcoin_core_test_vectors() {
        let test_data: [(&str, &str); 13] = [
            ("", ""),
            ("61", "2g"),
            ("626262", "a3gV"),
            ("636363", "aPEr"),
            ("73696d706c792061206c6f6e6720737472696e67", "2cFupjhnEsSn59qHXstmK2ffpLv2"),
            ("00eb15231dfceb60925886b67d065299925915aeb172c06647", "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"),
            ("516b6fcd0f", "ABnLTmg"),
            ("bf4f89001e670274dd", "3SEo3LWLoPntC"),
            ("572e4794", "3EFU7m"),
            ("ecac89cad93923c02321", "EJDM8drfXA6uyA"),
            ("10c8511e", "Rt5zm"),
            ("00000000000000000000", "1111111111"),
            ("000111d38e5fc9071ffcd20b4a763cc9ae4f252bb4e48fd66a835e252ada93ff480d6dd43dc62a641155a5", "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz")
        ];

        for (raw, encoded) in test_data.iter() {
            let raw = hex::decode(raw).unwrap();
            assert_eq!(encode(&raw), *encoded);
            assert_eq!(decode(encoded).unwrap(), raw);
        }
    }

    #[test]
    fn short_vectors() {
        assert_eq!(encode(&[0x11]), "J");
        assert_eq!(encode(&[0xaa, 0xaa, 0xaa]), "zKrZ");
        assert_eq!(
            encode(&hex::decode("C1C44F4876C8C0FB72152462968432FC003B5A0EB9B8AD4C2CCD3451BA9457C8").unwrap()),
            "E3PJaAPGyx9upBRGwjRtAgbrayPvnCHLJxsnhitkXMVZ"
        );
    }

    #[test]
    fn raw_wif_payloads() {
        let cases: [(&str, &str); 4] = [
            ("800000000000000000000000000000000000000000000000000000000000000001014671fc3f", "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn"),
            ("809ae65d9154ac2490d7fb3f5e63d37d174a2e8d8a1744f9114f6486f315c08f06010ac19d23", "L2QpHCj82EZdtYpYLwFpLbDjSaehhkZ4BX3x1mb67RzqGsV5biZG"),
            ("809ae65d9154ac2490d7fb3f5e63d37d174a2e8d8a1744f9114f6486f315c08f06f1ffc4f8", "5JzWHp4eqmJpKvt6k2sUwjeKgKxDPpvwBzZPS6a6gyQyhrmbJgF"),
            ("ef000000000000000000000000000000000000000000000000000000000000000201e7102cb5", "cMahea7zqjxrtgAbB7LSGbcQUr1uX1ojuat9jZodMN87K7XCyj5v")
        ];

        for (raw, encoded) in cases.iter() {
            assert_eq!(encode(&hex::decode(raw).unwrap()), *encoded);
        }
    }

    #[test]
    fn all_zero_payload_is_all_ones() {
        assert_eq!(encode(&[0; 5]), "11111");
        assert_eq!(decode("11111").unwrap(), vec![0; 5]);
    }

    #[test]
    fn check_encode_appends_checksum() {
        let hash = hex::decode("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap();
        let address = Base58::new(Some(VersionPrefix::BTCAddress), &hash).check_encode();
        assert_eq!(address, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
    }

    #[test]
    fn check_decode_keeps_version_prefix() {
        let decoded = Base58::check_decode("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH").expect("Decode failed");
        assert_eq!(decoded[0], 0x00);
        assert_eq!(hex::encode(&decoded[1..]), "751e76e8199196d454941c45d1b3a323f1433bd6");
    }

    #[test]
    fn decode_rejects_characters_outside_alphabet() {
        let invalid = [
            ("OWDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn", 'O'),
            ("lMahea7zqjxrtgAbB7LSGbcQUr1uX1ojuat9jZodMN87K7XCyj5V", 'l'),
            ("IHpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kt87rU1oi9ao", 'I'),
            ("0HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kt87rU1oi9ao", '0')
        ];

        for (input, bad) in invalid.iter() {
            assert_eq!(
                check_decode(input),
                Err(Base58Error::InvalidCharacter { character: *bad, index: 0 })
            );
        }
        assert!(matches!(decode("abc é"), Err(Base58Error::InvalidCharacter { index: 3, .. })));
    }

    #[test]
    fn decode_rejects_bad_checksums() {
        let invalid = [
            "KWDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn",
            "cMahea7zqjxrtgAbB7LSGbcQUr1uX1ojuat9jZodMN87K7XCyj5V",
            "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kt87rU1oi9ao"
        ];

        for input in invalid.iter() {
            assert!(matches!(check_decode(input), Err(Base58Error::ChecksumMismatch { .. })));
            assert_eq!(Base58::validate_checksum(input), Ok(false));
        }
        assert_eq!(Base58::validate_checksum("KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn"), Ok(true));
    }

    #[test]
    fn decode_rejects_short_input() {
        for input in ["noWn", "j5V", "ao", "", "1111"].iter() {
            assert!(matches!(check_decode(input), Err(Base58Error::InputTooShort(_))));
        }
    }

    #[test]
    fn decimal_digits() {
        assert_eq!(to_base_digits(&[0x30, 0x39], 10), vec![1, 2, 3, 4, 5]);
        assert!(to_base_digits(&[0, 0], 10).is_empty());
    }
}
