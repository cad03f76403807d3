//! Bump-seed search for program derived addresses.
//!
//! Every candidate preimage has the shape
//! `seed₀ ‖ … ‖ seedₙ₋₁ ‖ [bump] ‖ program_id ‖ marker`, where the marker is
//! a fixed ASCII tag that scopes the SHA-256 digest to this derivation
//! scheme and keeps it from colliding with any other use of the hash over
//! the same inputs.

use sha2::{Digest, Sha256};

use crate::address::Address;
use crate::curve;
use crate::errors::DeriveError;

/// Maximum number of seeds per derivation.
pub const MAX_SEEDS: usize = 16;

/// Maximum encoded length of a single seed, in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// Domain separator appended to every candidate preimage.
const PDA_MARKER: &[u8; 21] = b"ProgramDerivedAddress";

fn validate(seeds: &[&[u8]]) -> Result<(), DeriveError> {
    if seeds.len() > MAX_SEEDS {
        return Err(DeriveError::TooManySeeds { count: seeds.len() });
    }
    for (index, seed) in seeds.iter().enumerate() {
        if seed.len() > MAX_SEED_LEN {
            return Err(DeriveError::SeedTooLarge {
                index,
                len: seed.len(),
            });
        }
    }
    Ok(())
}

fn candidate(seeds: &[&[u8]], bump: u8, program_id: &Address) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update([bump]);
    hasher.update(program_id.as_array());
    hasher.update(PDA_MARKER);
    hasher.finalize().into()
}

/// Compute the candidate address for one specific bump.
///
/// Fails with [`DeriveError::OnCurve`] when the digest decompresses to a
/// valid curve point and is therefore unusable as a keyless address.
pub fn create_program_address(
    seeds: &[&[u8]],
    bump: u8,
    program_id: &Address,
) -> Result<Address, DeriveError> {
    validate(seeds)?;
    let digest = candidate(seeds, bump, program_id);
    if curve::is_on_curve(&digest) {
        return Err(DeriveError::OnCurve);
    }
    Ok(Address::new(digest))
}

/// Find the program derived address for `seeds` under `program_id`.
///
/// Bumps are probed from 255 downward and the first off-curve digest wins,
/// so the returned bump is always the highest valid one; identical inputs
/// always produce identical output. The 256-candidate ceiling is part of the
/// derivation contract and is not configurable. Exhausting it is reported as
/// a typed error, although no exhausting input is known.
pub fn derive_program_address(
    seeds: &[&[u8]],
    program_id: &Address,
) -> Result<(Address, u8), DeriveError> {
    validate(seeds)?;
    for bump in (0..=u8::MAX).rev() {
        let digest = candidate(seeds, bump, program_id);
        if !curve::is_on_curve(&digest) {
            return Ok((Address::new(digest), bump));
        }
    }
    Err(DeriveError::Exhausted)
}
