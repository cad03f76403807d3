//! Typed seed encoding.
//!
//! A seed arrives from the presentation layer as a raw string plus a
//! declared kind, and each kind has one fixed encoding rule. Interpretation
//! is never inferred from the value itself; validation is strict and happens
//! here at the boundary, before any hashing downstream.

use std::str::FromStr;

use crate::address::Address;
use crate::errors::SeedEncodeError;

/// The declared interpretation of a seed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedKind {
    /// Raw UTF-8 bytes of the value, any length.
    Text,
    /// A zero-initialized 32-byte buffer with the value's UTF-8 bytes
    /// written at offset 0. Longer input is silently truncated; see
    /// [`encode_seed`].
    Fixed32,
    /// A base-58 encoded 32-byte public key.
    Pubkey,
    /// Unsigned integer, little-endian, 1 byte.
    Uint8,
    /// Unsigned integer, little-endian, 2 bytes.
    Uint16,
    /// Unsigned integer, little-endian, 4 bytes.
    Uint32,
    /// Unsigned integer, little-endian, 8 bytes.
    Uint64,
}

impl SeedKind {
    /// Parse a textual kind tag as supplied by presentation layers.
    pub fn parse(tag: &str) -> Result<Self, SeedEncodeError> {
        match tag {
            "text" => Ok(SeedKind::Text),
            "fixed32" => Ok(SeedKind::Fixed32),
            "pubkey" => Ok(SeedKind::Pubkey),
            "uint8" => Ok(SeedKind::Uint8),
            "uint16" => Ok(SeedKind::Uint16),
            "uint32" => Ok(SeedKind::Uint32),
            "uint64" => Ok(SeedKind::Uint64),
            other => Err(SeedEncodeError::UnsupportedKind(other.to_string())),
        }
    }
}

impl FromStr for SeedKind {
    type Err = SeedEncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Encode one seed value under its declared kind.
///
/// `Fixed32` keeps only the first 32 UTF-8 bytes of longer input without
/// signaling an error. That truncation matches the long-standing behavior of
/// the tool this crate replaces and is kept deliberately; callers that
/// consider it an error must bound the input length themselves.
pub fn encode_seed(kind: SeedKind, value: &str) -> Result<Vec<u8>, SeedEncodeError> {
    match kind {
        SeedKind::Text => Ok(value.as_bytes().to_vec()),
        SeedKind::Fixed32 => {
            let mut out = vec![0u8; 32];
            let raw = value.as_bytes();
            let n = raw.len().min(32);
            out[..n].copy_from_slice(&raw[..n]);
            Ok(out)
        }
        SeedKind::Pubkey => Address::from_base58(value)
            .map(|a| a.to_bytes().to_vec())
            .map_err(SeedEncodeError::InvalidPublicKey),
        SeedKind::Uint8 => encode_uint(value, 1),
        SeedKind::Uint16 => encode_uint(value, 2),
        SeedKind::Uint32 => encode_uint(value, 4),
        SeedKind::Uint64 => encode_uint(value, 8),
    }
}

/// Little-endian encoding of a decimal string into exactly `width` bytes.
fn encode_uint(value: &str, width: usize) -> Result<Vec<u8>, SeedEncodeError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SeedEncodeError::NonNumeric {
            value: value.to_string(),
        });
    }
    // A decimal string too long even for u128 certainly exceeds any
    // supported width.
    let parsed: u128 = value.parse().map_err(|_| SeedEncodeError::IntegerOverflow {
        value: value.to_string(),
        width,
    })?;
    let limit = (1u128 << (8 * width as u32)) - 1;
    if parsed > limit {
        return Err(SeedEncodeError::IntegerOverflow {
            value: value.to_string(),
            width,
        });
    }
    Ok(parsed.to_le_bytes()[..width].to_vec())
}
