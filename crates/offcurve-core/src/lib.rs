//! offcurve-core
//!
//! Core primitives for keyless address derivation:
//! - `Address`: opaque 32-byte addresses with a base-58 text codec
//! - `SeedKind` + `encode_seed`: strict per-kind seed encoding rules
//! - Ed25519 curve-membership test (point decompression over GF(2^255 - 19))
//! - The descending bump-seed search that yields program derived addresses
//! - Fixed token-program constants and the associated-address resolver
//!
//! Everything in this crate is a pure function of its inputs: no I/O, no
//! global state, no secret material. Independent derivations may run
//! concurrently without any coordination.

pub mod address;
pub mod curve;
pub mod derive;
pub mod errors;
pub mod seed;
pub mod token;

pub use crate::errors::{AddressError, DeriveError, SeedEncodeError};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::address::Address;
    pub use crate::curve::is_on_curve;
    pub use crate::derive::{
        create_program_address, derive_program_address, MAX_SEEDS, MAX_SEED_LEN,
    };
    pub use crate::errors::{AddressError, DeriveError, SeedEncodeError};
    pub use crate::seed::{encode_seed, SeedKind};
    pub use crate::token::{
        derive_associated_address, ASSOCIATED_TOKEN_PROGRAM_ID, TOKEN_PROGRAM_ID,
    };
}
