//! Request-level errors.
//!
//! Each variant renders a human-readable message via `Display`; presentation
//! layers show that text directly and never need to crash on malformed
//! input.

use thiserror::Error;

use offcurve_core::errors::{AddressError, DeriveError, SeedEncodeError};

/// Why a derivation request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// A required text field was empty after trimming.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// Every supplied seed row was empty.
    #[error("at least one non-empty seed is required")]
    NoSeeds,
    /// A wallet, mint, or program id did not parse as a 32-byte address.
    #[error("invalid {field}: {source}")]
    BadAddress {
        field: &'static str,
        source: AddressError,
    },
    /// A seed row failed its kind's encoding rule.
    #[error("seed rejected: {0}")]
    Seed(#[from] SeedEncodeError),
    /// The engine refused the request or exhausted the bump search.
    #[error(transparent)]
    Derive(#[from] DeriveError),
}
