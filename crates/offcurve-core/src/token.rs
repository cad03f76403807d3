//! Fixed token-program constants and the associated-address resolver.
//!
//! The associated address scheme composes exactly three seeds: the owning
//! wallet, the token program id, and the mint, derived under the associated
//! token program id. Only the address is exposed; the bump stays internal.
//!
//! Keep the two constants stable: they are published protocol values and
//! every derived associated address depends on them byte for byte.

use crate::address::Address;
use crate::derive::derive_program_address;
use crate::errors::DeriveError;

/// `TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`
pub const TOKEN_PROGRAM_ID: Address = Address::new([
    6, 221, 246, 225, 215, 101, 161, 147, 217, 203, 225, 70, 206, 235, 121, 172, 28, 180, 133,
    237, 95, 91, 55, 145, 58, 140, 245, 133, 126, 255, 0, 169,
]);

/// `ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL`
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Address = Address::new([
    140, 151, 37, 143, 78, 36, 137, 241, 187, 61, 16, 41, 20, 142, 13, 131, 11, 90, 19, 153, 218,
    255, 16, 132, 4, 142, 123, 216, 219, 233, 248, 89,
]);

/// Derive the associated token address for `wallet` holding `mint`.
pub fn derive_associated_address(
    wallet: &Address,
    mint: &Address,
) -> Result<Address, DeriveError> {
    let seeds = [wallet.as_ref(), TOKEN_PROGRAM_ID.as_ref(), mint.as_ref()];
    let (address, _bump) = derive_program_address(&seeds, &ASSOCIATED_TOKEN_PROGRAM_ID)?;
    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_their_published_text_form() {
        assert_eq!(
            TOKEN_PROGRAM_ID.to_base58(),
            "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
        );
        assert_eq!(
            ASSOCIATED_TOKEN_PROGRAM_ID.to_base58(),
            "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL"
        );
    }

    #[test]
    fn matches_the_equivalent_generic_derivation() {
        let wallet =
            Address::from_base58("4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T").unwrap();
        let mint =
            Address::from_base58("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v").unwrap();

        let resolved = derive_associated_address(&wallet, &mint).unwrap();
        let seeds = [wallet.as_ref(), TOKEN_PROGRAM_ID.as_ref(), mint.as_ref()];
        let (generic, _bump) =
            derive_program_address(&seeds, &ASSOCIATED_TOKEN_PROGRAM_ID).unwrap();
        assert_eq!(resolved, generic);
    }
}
