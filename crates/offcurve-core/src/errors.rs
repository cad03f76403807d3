//! Error types for offcurve-core.
//!
//! Every failure path in this crate is a typed value. Structural validation
//! (decoding, lengths, numeric parsing) happens before any hashing, and no
//! input can make the crate panic.

use thiserror::Error;

use crate::derive::{MAX_SEEDS, MAX_SEED_LEN};

/// Errors from the base-58 address codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The text contains characters outside the base-58 alphabet.
    #[error("invalid base-58 text")]
    InvalidBase58,
    /// The text decoded, but not to exactly 32 bytes.
    #[error("decoded to {actual} bytes, expected 32")]
    WrongLength { actual: usize },
}

/// Errors from encoding a single `(value, kind)` seed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedEncodeError {
    /// A `pubkey` seed did not decode to a 32-byte address.
    #[error("invalid public key seed: {0}")]
    InvalidPublicKey(AddressError),
    /// A numeric seed is empty or contains non-digit characters.
    #[error("not an unsigned integer: {value:?}")]
    NonNumeric { value: String },
    /// A numeric seed does not fit the declared width.
    #[error("{value} does not fit in {width} byte(s)")]
    IntegerOverflow { value: String, width: usize },
    /// The textual kind tag is not one of the recognized kinds.
    #[error("unsupported seed kind: {0:?}")]
    UnsupportedKind(String),
}

/// Errors from program-address derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    #[error("{count} seeds supplied, the maximum is {}", MAX_SEEDS)]
    TooManySeeds { count: usize },
    #[error("seed {index} is {len} bytes, the maximum is {}", MAX_SEED_LEN)]
    SeedTooLarge { index: usize, len: usize },
    /// The candidate digest for this bump decompresses to a curve point, so
    /// it cannot be used as a keyless address.
    #[error("digest is a valid curve point")]
    OnCurve,
    /// No bump in 255..=0 produced an off-curve digest.
    #[error("no off-curve address found for these seeds and program id")]
    Exhausted,
}
