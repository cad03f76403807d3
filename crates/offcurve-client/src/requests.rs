//! The two request operations and their wire-friendly types.

use serde::{Deserialize, Serialize};
use tracing::debug;

use offcurve_core::address::Address;
use offcurve_core::derive::derive_program_address;
use offcurve_core::seed::{encode_seed, SeedKind};
use offcurve_core::token::derive_associated_address;

use crate::errors::RequestError;

/// One seed row as supplied by a presentation layer.
///
/// `kind` is a textual tag (`text`, `fixed32`, `pubkey`, `uint8`, `uint16`,
/// `uint32`, `uint64`); anything else fails the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedInput {
    pub value: String,
    pub kind: String,
}

/// Result of a generic program-derived-address request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdaResponse {
    /// Base-58 text of the derived address.
    pub address: String,
    /// The bump the search settled on, always the highest valid one.
    pub bump: u8,
}

/// Result of an associated-address request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtaResponse {
    /// Base-58 text of the derived address.
    pub address: String,
}

fn parse_address(field: &'static str, text: &str) -> Result<Address, RequestError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(RequestError::MissingField(field));
    }
    Address::from_base58(text).map_err(|source| RequestError::BadAddress { field, source })
}

/// Derive the associated address for a wallet/mint pair given as base-58
/// text.
pub fn derive_ata(wallet: &str, mint: &str) -> Result<AtaResponse, RequestError> {
    let wallet = parse_address("wallet address", wallet)?;
    let mint = parse_address("mint address", mint)?;

    let address = derive_associated_address(&wallet, &mint)?;
    debug!(%address, "derived associated address");
    Ok(AtaResponse {
        address: address.to_base58(),
    })
}

/// Derive a program derived address from a program id and ordered seed rows.
///
/// Seed values are trimmed and rows that trim to empty are skipped, exactly
/// as the form this operation replaces behaved; the remaining rows keep
/// their supplied order. A request with no non-empty rows is rejected.
pub fn derive_pda(program_id: &str, seeds: &[SeedInput]) -> Result<PdaResponse, RequestError> {
    let program = parse_address("program id", program_id)?;

    let mut encoded: Vec<Vec<u8>> = Vec::with_capacity(seeds.len());
    for row in seeds {
        let value = row.value.trim();
        if value.is_empty() {
            continue;
        }
        let kind = SeedKind::parse(row.kind.trim())?;
        encoded.push(encode_seed(kind, value)?);
    }
    if encoded.is_empty() {
        return Err(RequestError::NoSeeds);
    }

    let refs: Vec<&[u8]> = encoded.iter().map(Vec::as_slice).collect();
    let (address, bump) = derive_program_address(&refs, &program)?;
    debug!(%address, bump, "derived program address");
    Ok(PdaResponse {
        address: address.to_base58(),
        bump,
    })
}
