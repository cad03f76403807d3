//! Ed25519 curve-membership test.
//!
//! A 32-byte candidate is read as a compressed Edwards point: a
//! little-endian y-coordinate with the top bit as the x-sign flag. The
//! candidate is on the curve exactly when x² = (y² - 1)/(d·y² + 1) has a
//! root in GF(2^255 - 19). Derivation rejects on-curve digests; that
//! rejection is what guarantees a derived address has no private key.
//!
//! This is a correctness check on public data (a hash of public inputs),
//! so the underlying field arithmetic runs in ordinary variable time.

mod field;

use field::FieldElement;

/// Whether `candidate` decompresses to a point on the Ed25519 curve.
///
/// The x-sign bit (bit 255) does not affect membership; it only selects
/// which of the two roots a full decompression would return. Non-canonical
/// y values (≥ p) are reduced, matching reference decompression.
pub fn is_on_curve(candidate: &[u8; 32]) -> bool {
    let y = FieldElement::from_bytes(candidate);
    let yy = y.square();
    let u = yy.sub(&FieldElement::ONE); // y² - 1
    let v = yy.mul(&FieldElement::EDWARDS_D).add(&FieldElement::ONE); // d·y² + 1

    let (has_root, _) = FieldElement::sqrt_ratio(&u, &v);
    has_root
}
