//! Primitives for deriving program addresses: the 32-byte [`Pubkey`],
//! its base-58 text form, and the seeded SHA-256 construction used to
//! find addresses that lie off the ed25519 curve.

pub mod hash;
pub mod pubkey;

#[macro_use]
extern crate serde_derive;
