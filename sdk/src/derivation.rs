//! Program address derivation for callers holding a base-58 program id and
//! owned seed bytes.
//!
//! Seed limits are checked before the program id is decoded, so a request
//! with both bad seeds and a bad program id reports the seed error.

use crate::pubkey::{check_program_address_seeds, Pubkey, PubkeyError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramDerivedAddressInput {
    /// Base-58 program id.
    pub program_address: String,
    pub seeds: Vec<Vec<u8>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramDerivedAddressOutput {
    pub address: Pubkey,
    pub bump: u8,
}

impl ProgramDerivedAddressInput {
    pub fn new<S: AsRef<[u8]>>(
        program_address: impl Into<String>,
        seeds: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            program_address: program_address.into(),
            seeds: seeds
                .into_iter()
                .map(|seed| seed.as_ref().to_vec())
                .collect(),
        }
    }

    fn seed_slices(&self) -> Vec<&[u8]> {
        self.seeds.iter().map(Vec::as_slice).collect()
    }

    fn program_id(&self) -> Result<Pubkey, PubkeyError> {
        Ok(self.program_address.parse()?)
    }
}

/// Search for the highest bump seed that yields an off-curve address.
pub fn derive_with_search(
    input: &ProgramDerivedAddressInput,
) -> Result<ProgramDerivedAddressOutput, PubkeyError> {
    let seeds = input.seed_slices();
    check_program_address_seeds(&seeds, true)?;
    let program_id = input.program_id()?;

    let (address, bump) = Pubkey::try_find_program_address(&seeds, &program_id)?;
    Ok(ProgramDerivedAddressOutput { address, bump })
}

/// Build the address from the seeds as given, bump seed included.
pub fn derive_direct(input: &ProgramDerivedAddressInput) -> Result<Pubkey, PubkeyError> {
    let seeds = input.seed_slices();
    check_program_address_seeds(&seeds, false)?;
    let program_id = input.program_id()?;

    Pubkey::create_program_address(&seeds, &program_id)
}

#[cfg(test)]
mod tests {
    use {super::*, crate::pubkey::ParsePubkeyError};

    static_assertions::assert_impl_all!(ProgramDerivedAddressInput: Send, Sync);
    static_assertions::assert_impl_all!(ProgramDerivedAddressOutput: Send, Sync, Copy);

    #[test]
    fn test_seed_errors_take_precedence_over_program_id() {
        let input = ProgramDerivedAddressInput::new("not-base58!", [[0u8; 33]]);
        assert_eq!(
            derive_with_search(&input),
            Err(PubkeyError::SeedTooLong { length: 33 })
        );
        assert_eq!(
            derive_direct(&input),
            Err(PubkeyError::SeedTooLong { length: 33 })
        );

        let input = ProgramDerivedAddressInput::new("not-base58!", [b"seed"; 16]);
        assert_eq!(
            derive_with_search(&input),
            Err(PubkeyError::TooManySeeds { count: 17 })
        );
        assert_eq!(
            derive_direct(&input),
            Err(PubkeyError::Parse(ParsePubkeyError::InvalidEncoding))
        );
    }

    #[test]
    fn test_short_program_id() {
        let input = ProgramDerivedAddressInput::new("1111", [b"seed"]);
        assert_eq!(
            derive_with_search(&input),
            Err(PubkeyError::Parse(ParsePubkeyError::InvalidLength {
                expected_length: 32,
                received_length: 4,
            }))
        );
    }
}
