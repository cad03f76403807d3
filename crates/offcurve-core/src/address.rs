//! 32-byte addresses and their base-58 text form.
//!
//! Addresses and program ids are structurally identical: an opaque 32-byte
//! value with no further structure. The text codec is plain big-integer
//! base-58 over the Bitcoin alphabet (no `0`, `O`, `I`, `l`) without a
//! checksum; leading zero bytes map to leading `'1'` characters.

use std::fmt;
use std::str::FromStr;

use crate::errors::AddressError;

/// Number of bytes in an address.
pub const ADDRESS_BYTES: usize = 32;

/// An opaque 32-byte address (or program id).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_BYTES]);

impl Address {
    /// Wrap raw bytes as an address.
    pub const fn new(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }

    /// Decode base-58 text. Succeeds only for text that decodes to exactly
    /// 32 bytes.
    pub fn from_base58(text: &str) -> Result<Self, AddressError> {
        let bytes = bs58::decode(text)
            .into_vec()
            .map_err(|_| AddressError::InvalidBase58)?;
        let arr: [u8; ADDRESS_BYTES] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| AddressError::WrongLength { actual: bytes.len() })?;
        Ok(Self(arr))
    }

    /// Encode as base-58 text.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// Borrow the raw bytes.
    pub const fn as_array(&self) -> &[u8; ADDRESS_BYTES] {
        &self.0
    }

    /// Copy out the raw bytes.
    pub const fn to_bytes(self) -> [u8; ADDRESS_BYTES] {
        self.0
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl From<[u8; ADDRESS_BYTES]> for Address {
    fn from(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; ADDRESS_BYTES] = bytes
            .try_into()
            .map_err(|_| AddressError::WrongLength { actual: bytes.len() })?;
        Ok(Self(arr))
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}
