use crate::{types::BencodeValue, SHA1_SIZE};
use sha1::{Digest, Sha1};
use std::fmt;

/// SHA-1 of the canonical encoding of a torrent `info` dictionary.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct InfoHash([u8; SHA1_SIZE]);

impl InfoHash {
    pub fn from_info(info: &BencodeValue) -> Self {
        let digest = Sha1::digest(info.encode().as_slice());
        let mut hash = [0u8; SHA1_SIZE];
        hash.copy_from_slice(&digest[..]);
        Self(hash)
    }

    pub fn as_bytes(&self) -> &[u8; SHA1_SIZE] {
        &self.0
    }

    /// Lowercase hexadecimal form, 40 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; SHA1_SIZE]> for InfoHash {
    fn from(hash: [u8; SHA1_SIZE]) -> Self {
        Self(hash)
    }
}

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
