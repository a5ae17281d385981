//! Solana account addresses.

#![allow(clippy::arithmetic_side_effects)]

use {
    crate::hash::{Hash, Hasher},
    bytemuck_derive::{Pod, Zeroable},
    curve25519_dalek::edwards::CompressedEdwardsY,
    std::{fmt, str::FromStr},
    thiserror::Error,
};

/// Number of bytes in a pubkey
pub const PUBKEY_BYTES: usize = 32;
/// maximum length of derived `Pubkey` seed
pub const MAX_SEED_LEN: usize = 32;
/// Maximum number of seeds
pub const MAX_SEEDS: usize = 16;

/// Appended to every program address hash so that it cannot collide with
/// other uses of SHA-256 over the same bytes.
pub const PDA_MARKER: &[u8; 21] = b"ProgramDerivedAddress";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsePubkeyError {
    #[error("invalid base58 encoding")]
    InvalidEncoding,
    #[error("invalid length: expected {expected_length} bytes, but {received_length} was given")]
    InvalidLength {
        expected_length: usize,
        received_length: usize,
    },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PubkeyError {
    #[error(transparent)]
    Parse(#[from] ParsePubkeyError),
    /// Seed count, including the bump slot when one is reserved.
    #[error("max seeds exceeded: {count} (max: {})", MAX_SEEDS)]
    TooManySeeds { count: usize },
    #[error("seed too long: {length} bytes (max: {})", MAX_SEED_LEN)]
    SeedTooLong { length: usize },
    #[error("hash landed on curve")]
    PointOnCurve,
    #[error("no viable bump found")]
    NoViableBump,
}

#[repr(transparent)]
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Pod,
    Serialize,
    Zeroable,
)]
pub struct Pubkey(pub(crate) [u8; 32]);

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl FromStr for Pubkey {
    type Err = ParsePubkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|_| ParsePubkeyError::InvalidEncoding)?;
        Self::try_from(bytes.as_slice())
    }
}

impl From<[u8; 32]> for Pubkey {
    #[inline]
    fn from(from: [u8; 32]) -> Self {
        Self(from)
    }
}

impl TryFrom<&[u8]> for Pubkey {
    type Error = ParsePubkeyError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        <[u8; PUBKEY_BYTES]>::try_from(data)
            .map(Self)
            .map_err(|_| Self::Error::InvalidLength {
                expected_length: PUBKEY_BYTES,
                received_length: data.len(),
            })
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

/// Whether `bytes` is the compressed encoding of a point on the ed25519
/// curve.
///
/// Follows curve25519-dalek's decompression: the top bit of the last byte
/// is the sign of x, and y values at or above the field modulus are reduced
/// rather than rejected.
pub fn bytes_are_curve_point(bytes: &[u8; PUBKEY_BYTES]) -> bool {
    CompressedEdwardsY(*bytes).decompress().is_some()
}

/// Checks the seed count and seed lengths for program address derivation.
///
/// With `reserve_bump_slot` set, one of the [`MAX_SEEDS`] slots is kept
/// free for the bump seed that [`Pubkey::try_find_program_address`]
/// appends, and the reported count includes it.
pub fn check_program_address_seeds(
    seeds: &[&[u8]],
    reserve_bump_slot: bool,
) -> Result<(), PubkeyError> {
    let count = seeds.len() + usize::from(reserve_bump_slot);
    if count > MAX_SEEDS {
        return Err(PubkeyError::TooManySeeds { count });
    }
    if let Some(seed) = seeds.iter().find(|seed| seed.len() > MAX_SEED_LEN) {
        return Err(PubkeyError::SeedTooLong { length: seed.len() });
    }
    Ok(())
}

// sha256(seeds || [bump] || program_id || PDA_MARKER)
fn program_address_hash(seeds: &[&[u8]], bump: Option<u8>, program_id: &Pubkey) -> Hash {
    let mut hasher = Hasher::default();
    hasher.hashv(seeds);
    if let Some(bump) = bump {
        hasher.hash(&[bump]);
    }
    hasher.hashv(&[program_id.as_ref(), PDA_MARKER]);
    hasher.result()
}

impl Pubkey {
    pub const fn new_from_array(pubkey_array: [u8; 32]) -> Self {
        Self(pubkey_array)
    }

    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    pub const fn as_array(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_on_curve(&self) -> bool {
        bytes_are_curve_point(&self.0)
    }

    /// Create a program address from seeds that already include any bump
    /// seed.
    ///
    /// Fails with [`PubkeyError::PointOnCurve`] when the resulting hash is a
    /// valid ed25519 point, since such an address could have a private key.
    pub fn create_program_address(
        seeds: &[&[u8]],
        program_id: &Pubkey,
    ) -> Result<Pubkey, PubkeyError> {
        check_program_address_seeds(seeds, false)?;

        let hash = program_address_hash(seeds, None, program_id);
        if bytes_are_curve_point(&hash.to_bytes()) {
            return Err(PubkeyError::PointOnCurve);
        }
        Ok(Pubkey::from(hash.to_bytes()))
    }

    /// Find a valid program address and its bump seed.
    ///
    /// Bump seeds are tried from 255 down to 0 and the first one whose hash
    /// lies off the curve wins. Passing `seeds ++ [[bump]]` to
    /// [`Pubkey::create_program_address`] reproduces the same address.
    pub fn try_find_program_address(
        seeds: &[&[u8]],
        program_id: &Pubkey,
    ) -> Result<(Pubkey, u8), PubkeyError> {
        check_program_address_seeds(seeds, true)?;

        (0..=u8::MAX)
            .rev()
            .map(|bump| (program_address_hash(seeds, Some(bump), program_id), bump))
            .find(|(hash, _)| !bytes_are_curve_point(&hash.to_bytes()))
            .map(|(hash, bump)| (Pubkey::from(hash.to_bytes()), bump))
            .ok_or(PubkeyError::NoViableBump)
    }
}
