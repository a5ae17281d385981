pub use pda_program::{hash, pubkey};

pub mod bridge;
pub mod derivation;
pub mod seed;

#[macro_use]
extern crate serde_derive;
