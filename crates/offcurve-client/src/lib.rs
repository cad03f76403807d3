//! offcurve-client
//!
//! The boundary between presentation layers (a form UI, an HTTP handler, a
//! test harness) and the derivation engine in `offcurve-core`. It exposes
//! exactly two operations:
//! - [`derive_pda`]: a program derived address from typed `(value, kind)`
//!   seed rows
//! - [`derive_ata`]: an associated address from wallet and mint text
//!
//! Inputs are plain strings, outputs are serde-friendly structs, and every
//! failure is a typed [`RequestError`] whose `Display` form is the
//! user-visible message. Both operations are pure: callers own all UI state
//! and may retry or parallelize freely.

pub mod errors;
pub mod requests;

pub use crate::errors::RequestError;
pub use crate::requests::{derive_ata, derive_pda, AtaResponse, PdaResponse, SeedInput};
