//! Hashing with the [SHA-256] hash function.
//!
//! [SHA-256]: https://en.wikipedia.org/wiki/SHA-2

use {
    sha2::{Digest, Sha256},
    std::fmt,
};

/// Size of a hash in bytes.
pub const HASH_BYTES: usize = 32;

/// A SHA-256 hash.
#[repr(transparent)]
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Hash(pub(crate) [u8; HASH_BYTES]);

/// Incremental SHA-256 over a sequence of byte slices.
///
/// Slices are fed in order with no length prefix or separator, so
/// hashing `[b"ab", b"c"]` and `[b"abc"]` gives the same result.
#[derive(Clone, Default)]
pub struct Hasher {
    hasher: Sha256,
}

impl Hasher {
    pub fn hash(&mut self, val: &[u8]) {
        self.hasher.update(val);
    }

    pub fn hashv(&mut self, vals: &[&[u8]]) {
        for val in vals {
            self.hash(val);
        }
    }

    pub fn result(self) -> Hash {
        Hash(self.hasher.finalize().into())
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl From<[u8; HASH_BYTES]> for Hash {
    #[inline]
    fn from(from: [u8; HASH_BYTES]) -> Self {
        Self(from)
    }
}

impl Hash {
    pub const fn new_from_array(hash_array: [u8; HASH_BYTES]) -> Self {
        Self(hash_array)
    }

    pub const fn to_bytes(self) -> [u8; HASH_BYTES] {
        self.0
    }
}
