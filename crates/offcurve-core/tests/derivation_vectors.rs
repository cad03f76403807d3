//! End-to-end derivation vectors.
//!
//! Expected addresses and bumps were produced with an independent
//! implementation of the same derivation scheme (SHA-256 over
//! seeds ‖ bump ‖ program id ‖ marker, Ed25519 decompression rejection) and
//! cross-checked against reference field arithmetic, so any drift in seed
//! encoding, hashing order, or the curve test shows up as an exact mismatch
//! here.

use offcurve_core::prelude::*;

fn addr(text: &str) -> Address {
    Address::from_base58(text).unwrap()
}

#[test]
fn single_pubkey_seed_under_the_upgradeable_loader() {
    let program = addr("BPFLoaderUpgradeab1e11111111111111111111111");
    let seed = encode_seed(SeedKind::Pubkey, "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA")
        .unwrap();
    let (address, bump) = derive_program_address(&[&seed], &program).unwrap();
    assert_eq!(
        address.to_base58(),
        "3gvYRKWyXRR9xKWe1ZjPhLY5ZJRN7KDB4rFZFGoJfFk2"
    );
    assert_eq!(bump, 254);
}

#[test]
fn text_seed_skips_an_on_curve_candidate() {
    let program = addr("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
    let (address, bump) = derive_program_address(&[b"metadata"], &program).unwrap();
    assert_eq!(
        address.to_base58(),
        "3ijiZDfPJaxmakuhGZj8MYAVxxxmtprvF7mR85XJMmd6"
    );
    assert_eq!(bump, 254);
    // Bump 255 must have been rejected as on-curve for the bump to be 254.
    assert!(matches!(
        create_program_address(&[b"metadata"], 255, &program),
        Err(DeriveError::OnCurve)
    ));
}

#[test]
fn mixed_text_and_uint64_seeds() {
    let program = addr("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
    let vault = encode_seed(SeedKind::Text, "vault").unwrap();
    let index = encode_seed(SeedKind::Uint64, "7").unwrap();
    let (address, bump) = derive_program_address(&[&vault, &index], &program).unwrap();
    assert_eq!(
        address.to_base58(),
        "8zpDzqxmjBaPDGfaykzCfY7bZky5jD7pJB1gJdMFUVvd"
    );
    assert_eq!(bump, 255);
}

#[test]
fn uint16_seed_is_little_endian() {
    let program = addr("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
    let seed = encode_seed(SeedKind::Uint16, "513").unwrap();
    assert_eq!(seed, [0x01, 0x02]);
    let (address, bump) = derive_program_address(&[&seed], &program).unwrap();
    assert_eq!(
        address.to_base58(),
        "Ee9Wg341icZMug44RJk3Yovpwn6x75AGAwj3VTMq9GU3"
    );
    assert_eq!(bump, 255);
}

#[test]
fn fixed32_seed_pads_before_hashing() {
    let program = addr("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
    let seed = encode_seed(SeedKind::Fixed32, "abc").unwrap();
    let (address, bump) = derive_program_address(&[&seed], &program).unwrap();
    assert_eq!(
        address.to_base58(),
        "7DHsZrGZjJGgkomWcxzU7KugpPMF95NFvRJoxxTfbjRu"
    );
    assert_eq!(bump, 252);
}

#[test]
fn associated_address_vector_with_three_on_curve_rejections() {
    let wallet = addr("4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T");
    let mint = addr("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");

    let address = derive_associated_address(&wallet, &mint).unwrap();
    assert_eq!(
        address.to_base58(),
        "F8biqkCRK2tHR6EncrcXDGgVTkGRrtojqyW39w41Qspn"
    );

    // The generic derivation agrees and lands on bump 252, meaning bumps
    // 255, 254 and 253 all hashed onto the curve: the search really is
    // "highest bump whose digest is off-curve".
    let seeds = [wallet.as_ref(), TOKEN_PROGRAM_ID.as_ref(), mint.as_ref()];
    let (generic, bump) = derive_program_address(&seeds, &ASSOCIATED_TOKEN_PROGRAM_ID).unwrap();
    assert_eq!(generic, address);
    assert_eq!(bump, 252);
    for rejected in [255, 254, 253] {
        assert!(matches!(
            create_program_address(&seeds, rejected, &ASSOCIATED_TOKEN_PROGRAM_ID),
            Err(DeriveError::OnCurve)
        ));
    }
}

#[test]
fn every_returned_address_fails_the_membership_test() {
    let program = addr("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
    for label in ["a", "b", "c", "state", "escrow", "authority"] {
        let (address, _bump) =
            derive_program_address(&[label.as_bytes()], &program).unwrap();
        assert!(!is_on_curve(address.as_array()), "seed {label:?}");
    }
}
