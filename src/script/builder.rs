/* 

    Script builder module.

*/

use super::Script;

#[derive(Debug, Clone, Default)]
pub struct Builder {
    pub code: Vec<u8>
}

impl Builder {
    /// Return a new instance of self
    pub fn new() -> Self  {
        Self { code: Vec::new() }
    }

    /// Push an opcode into self
    pub fn push_opcode(mut self, opcode: Opcode) -> Self {
        self.code.push(opcode.into_u8());
        self
    }

    //Push a slice into the code
    pub fn push_slice(mut self, slice: &[u8]) -> Self {
        self.code.extend_from_slice(slice);
        self
    }

    /// Push a 20 byte hash preceded by its push opcode
    pub fn push_hash160(self, hash: &[u8; 20]) -> Self {
        self.push_opcode(opcodes::OP_PUSHBYTES_20)
            .push_slice(hash)
    }

    /// Convert self into a script
    pub fn into_script(self) -> Script {
        Script::new(self.code)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    code: u8
}

impl Opcode {
    pub fn into_u8(self) -> u8 {
        self.code
    }
}

impl From<u8> for Opcode {
    fn from(code: u8) -> Self {
        Self { code }
    }
}

// Opcodes used by the standard output scripts
pub mod opcodes {
    use super::Opcode;

    /// Push an empty array onto the stack. Doubles as witness version 0.
    pub const OP_0: Opcode = Opcode {code: 0x00};
    /// Push the next 20 bytes as an array onto the stack
    pub const OP_PUSHBYTES_20: Opcode = Opcode {code: 0x14};
    /// Duplicates the top stack item
    pub const OP_DUP: Opcode = Opcode {code: 0x76};
    /// Pushes 1 if the inputs are exactly equal, 0 otherwise
    pub const OP_EQUAL: Opcode = Opcode {code: 0x87};
    /// Returns success if the inputs are exactly equal, failure otherwise
    pub const OP_EQUALVERIFY: Opcode = Opcode {code: 0x88};
    /// RIPEMD160(SHA256) the top stack item
    pub const OP_HASH160: Opcode = Opcode {code: 0xa9};
    /// <https://en.bitcoin.it/wiki/OP_CHECKSIG> pushing 1/0 for success/failure
    pub const OP_CHECKSIG: Opcode = Opcode {code: 0xac};
}
