//! Arithmetic over GF(2^255 - 19).
//!
//! Elements are held as five unsigned 51-bit limbs with u128 intermediate
//! products, the serial u64 representation used by curve25519-dalek. The
//! operations here run in variable time: decompression candidates are
//! SHA-256 digests of public inputs, so no secret ever flows through this
//! module. Results are bit-exact against the reference field definition.

const LOW_51_BIT_MASK: u64 = (1 << 51) - 1;

/// A field element mod p = 2^255 - 19, radix-2^51 limbs, least significant
/// first. Limbs of a reduced element stay below 2^52, which the add/sub/mul
/// bounds below rely on.
#[derive(Debug, Clone, Copy)]
pub(super) struct FieldElement([u64; 5]);

impl FieldElement {
    pub(super) const ZERO: FieldElement = FieldElement([0; 5]);
    pub(super) const ONE: FieldElement = FieldElement([1, 0, 0, 0, 0]);

    /// The curve parameter d = -121665/121666 mod p.
    pub(super) const EDWARDS_D: FieldElement = FieldElement([
        929955233495203,
        466365720129213,
        1662059464998953,
        2033849074728123,
        1442794654840575,
    ]);

    /// sqrt(-1) mod p, the correction factor for the second square-root
    /// branch of the p = 5 (mod 8) field.
    pub(super) const SQRT_M1: FieldElement = FieldElement([
        1718705420411056,
        234908883556509,
        2233514472574048,
        2117202627021982,
        765476049583133,
    ]);

    /// Load a little-endian 255-bit value. Bit 255 (the compressed-point
    /// sign flag) is discarded; values above p are reduced implicitly.
    pub(super) fn from_bytes(bytes: &[u8; 32]) -> FieldElement {
        fn load8(bytes: &[u8; 32], offset: usize) -> u64 {
            let mut word = [0u8; 8];
            word.copy_from_slice(&bytes[offset..offset + 8]);
            u64::from_le_bytes(word)
        }

        FieldElement([
            load8(bytes, 0) & LOW_51_BIT_MASK,
            (load8(bytes, 6) >> 3) & LOW_51_BIT_MASK,
            (load8(bytes, 12) >> 6) & LOW_51_BIT_MASK,
            (load8(bytes, 19) >> 1) & LOW_51_BIT_MASK,
            (load8(bytes, 24) >> 12) & LOW_51_BIT_MASK,
        ])
    }

    /// Canonical little-endian encoding, fully reduced below p.
    pub(super) fn to_bytes(self) -> [u8; 32] {
        let mut limbs = Self::weak_reduce(self.0).0;

        // Compute q = (value + 19) >> 255; q is 1 exactly when the weakly
        // reduced value lies in [p, 2p), so adding 19q and dropping bit 255
        // lands in [0, p).
        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        limbs[0] += 19 * q;
        limbs[1] += limbs[0] >> 51;
        limbs[0] &= LOW_51_BIT_MASK;
        limbs[2] += limbs[1] >> 51;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[3] += limbs[2] >> 51;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[4] += limbs[3] >> 51;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] &= LOW_51_BIT_MASK;

        let mut s = [0u8; 32];
        s[0] = limbs[0] as u8;
        s[1] = (limbs[0] >> 8) as u8;
        s[2] = (limbs[0] >> 16) as u8;
        s[3] = (limbs[0] >> 24) as u8;
        s[4] = (limbs[0] >> 32) as u8;
        s[5] = (limbs[0] >> 40) as u8;
        s[6] = ((limbs[0] >> 48) | (limbs[1] << 3)) as u8;
        s[7] = (limbs[1] >> 5) as u8;
        s[8] = (limbs[1] >> 13) as u8;
        s[9] = (limbs[1] >> 21) as u8;
        s[10] = (limbs[1] >> 29) as u8;
        s[11] = (limbs[1] >> 37) as u8;
        s[12] = ((limbs[1] >> 45) | (limbs[2] << 6)) as u8;
        s[13] = (limbs[2] >> 2) as u8;
        s[14] = (limbs[2] >> 10) as u8;
        s[15] = (limbs[2] >> 18) as u8;
        s[16] = (limbs[2] >> 26) as u8;
        s[17] = (limbs[2] >> 34) as u8;
        s[18] = (limbs[2] >> 42) as u8;
        s[19] = ((limbs[2] >> 50) | (limbs[3] << 1)) as u8;
        s[20] = (limbs[3] >> 7) as u8;
        s[21] = (limbs[3] >> 15) as u8;
        s[22] = (limbs[3] >> 23) as u8;
        s[23] = (limbs[3] >> 31) as u8;
        s[24] = (limbs[3] >> 39) as u8;
        s[25] = ((limbs[3] >> 47) | (limbs[4] << 4)) as u8;
        s[26] = (limbs[4] >> 4) as u8;
        s[27] = (limbs[4] >> 12) as u8;
        s[28] = (limbs[4] >> 20) as u8;
        s[29] = (limbs[4] >> 28) as u8;
        s[30] = (limbs[4] >> 36) as u8;
        s[31] = (limbs[4] >> 44) as u8;
        s
    }

    /// One carry pass: limbs below 2^64 in, limbs below 2^52 out. The value
    /// may still exceed p by at most one multiple.
    fn weak_reduce(mut limbs: [u64; 5]) -> FieldElement {
        let c0 = limbs[0] >> 51;
        let c1 = limbs[1] >> 51;
        let c2 = limbs[2] >> 51;
        let c3 = limbs[3] >> 51;
        let c4 = limbs[4] >> 51;

        limbs[0] &= LOW_51_BIT_MASK;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] &= LOW_51_BIT_MASK;

        // The carry out of the top limb wraps around multiplied by 19
        // because 2^255 = 19 mod p.
        limbs[0] += c4 * 19;
        limbs[1] += c0;
        limbs[2] += c1;
        limbs[3] += c2;
        limbs[4] += c3;

        FieldElement(limbs)
    }

    pub(super) fn add(&self, rhs: &FieldElement) -> FieldElement {
        let mut limbs = [0u64; 5];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = self.0[i] + rhs.0[i];
        }
        Self::weak_reduce(limbs)
    }

    pub(super) fn sub(&self, rhs: &FieldElement) -> FieldElement {
        // Add 16p first so no limb underflows.
        Self::weak_reduce([
            (self.0[0] + 36028797018963664) - rhs.0[0],
            (self.0[1] + 36028797018963952) - rhs.0[1],
            (self.0[2] + 36028797018963952) - rhs.0[2],
            (self.0[3] + 36028797018963952) - rhs.0[3],
            (self.0[4] + 36028797018963952) - rhs.0[4],
        ])
    }

    pub(super) fn neg(&self) -> FieldElement {
        Self::ZERO.sub(self)
    }

    pub(super) fn mul(&self, rhs: &FieldElement) -> FieldElement {
        #[inline(always)]
        fn m(x: u64, y: u64) -> u128 {
            (x as u128) * (y as u128)
        }

        let [a0, a1, a2, a3, a4] = self.0;
        let [b0, b1, b2, b3, b4] = rhs.0;

        // Schoolbook multiplication with the high half folded back in via
        // 2^255 = 19 mod p.
        let b1_19 = b1 * 19;
        let b2_19 = b2 * 19;
        let b3_19 = b3 * 19;
        let b4_19 = b4 * 19;

        let c0 = m(a0, b0) + m(a4, b1_19) + m(a3, b2_19) + m(a2, b3_19) + m(a1, b4_19);
        let mut c1 = m(a1, b0) + m(a0, b1) + m(a4, b2_19) + m(a3, b3_19) + m(a2, b4_19);
        let mut c2 = m(a2, b0) + m(a1, b1) + m(a0, b2) + m(a4, b3_19) + m(a3, b4_19);
        let mut c3 = m(a3, b0) + m(a2, b1) + m(a1, b2) + m(a0, b3) + m(a4, b4_19);
        let mut c4 = m(a4, b0) + m(a3, b1) + m(a2, b2) + m(a1, b3) + m(a0, b4);

        let mut out = [0u64; 5];
        c1 += (c0 >> 51) as u64 as u128;
        out[0] = (c0 as u64) & LOW_51_BIT_MASK;
        c2 += (c1 >> 51) as u64 as u128;
        out[1] = (c1 as u64) & LOW_51_BIT_MASK;
        c3 += (c2 >> 51) as u64 as u128;
        out[2] = (c2 as u64) & LOW_51_BIT_MASK;
        c4 += (c3 >> 51) as u64 as u128;
        out[3] = (c3 as u64) & LOW_51_BIT_MASK;
        let carry = (c4 >> 51) as u64;
        out[4] = (c4 as u64) & LOW_51_BIT_MASK;

        out[0] += carry * 19;
        out[1] += out[0] >> 51;
        out[0] &= LOW_51_BIT_MASK;

        FieldElement(out)
    }

    pub(super) fn square(&self) -> FieldElement {
        self.mul(self)
    }

    /// 2^k successive squarings.
    fn pow2k(&self, k: u32) -> FieldElement {
        let mut out = *self;
        for _ in 0..k {
            out = out.square();
        }
        out
    }

    /// z^((p-5)/8) = z^(2^252 - 3), the shared core of square-root
    /// computation in this field.
    fn pow_p58(&self) -> FieldElement {
        let t0 = self.square(); // 2
        let t1 = t0.square().square(); // 8
        let t2 = self.mul(&t1); // 9
        let t3 = t0.mul(&t2); // 11
        let t4 = t3.square(); // 22
        let t5 = t2.mul(&t4); // 2^5 - 1
        let t6 = t5.pow2k(5); // 2^10 - 2^5
        let t7 = t6.mul(&t5); // 2^10 - 1
        let t8 = t7.pow2k(10); // 2^20 - 2^10
        let t9 = t8.mul(&t7); // 2^20 - 1
        let t10 = t9.pow2k(20); // 2^40 - 2^20
        let t11 = t10.mul(&t9); // 2^40 - 1
        let t12 = t11.pow2k(10); // 2^50 - 2^10
        let t13 = t12.mul(&t7); // 2^50 - 1
        let t14 = t13.pow2k(50); // 2^100 - 2^50
        let t15 = t14.mul(&t13); // 2^100 - 1
        let t16 = t15.pow2k(100); // 2^200 - 2^100
        let t17 = t16.mul(&t15); // 2^200 - 1
        let t18 = t17.pow2k(50); // 2^250 - 2^50
        let t19 = t18.mul(&t13); // 2^250 - 1
        let t20 = t19.pow2k(2); // 2^252 - 4
        self.mul(&t20) // 2^252 - 3
    }

    fn eq_mod_p(&self, other: &FieldElement) -> bool {
        self.to_bytes() == other.to_bytes()
    }

    /// "Negative" means the canonical encoding is odd, matching the sign
    /// convention of compressed Edwards points.
    fn is_negative(&self) -> bool {
        self.to_bytes()[0] & 1 == 1
    }

    /// Compute sqrt(u/v) if it exists.
    ///
    /// Returns `(true, +sqrt(u/v))` when u/v is square (including u = 0) and
    /// `(false, r)` with r a related non-root otherwise. Only the flag
    /// matters for curve membership; the root is kept for tests.
    pub(super) fn sqrt_ratio(u: &FieldElement, v: &FieldElement) -> (bool, FieldElement) {
        let v3 = v.square().mul(v);
        let v7 = v3.square().mul(v);

        // Candidate root r = u * v^3 * (u * v^7)^((p-5)/8); one of
        // r^2 = u/v, r^2 = -u/v, or neither holds, decided below.
        let mut r = u.mul(&v3).mul(&u.mul(&v7).pow_p58());
        let check = v.mul(&r.square());

        let u_neg = u.neg();
        let correct_sign = check.eq_mod_p(u);
        let flipped_sign = check.eq_mod_p(&u_neg);
        let flipped_sign_i = check.eq_mod_p(&u_neg.mul(&Self::SQRT_M1));

        if flipped_sign || flipped_sign_i {
            r = r.mul(&Self::SQRT_M1);
        }
        if r.is_negative() {
            r = r.neg();
        }

        (correct_sign || flipped_sign, r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fe(bytes: &[u8; 32]) -> FieldElement {
        FieldElement::from_bytes(bytes)
    }

    fn bytes_of(n: u64) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[..8].copy_from_slice(&n.to_le_bytes());
        out
    }

    #[test]
    fn constants_encode_to_reference_values() {
        assert_eq!(
            hex::encode(FieldElement::EDWARDS_D.to_bytes()),
            "a3785913ca4deb75abd841414d0a700098e879777940c78c73fe6f2bee6c0352"
        );
        assert_eq!(
            hex::encode(FieldElement::SQRT_M1.to_bytes()),
            "b0a00e4a271beec478e42fad0618432fa7d7fb3d99004d2b0bdfc14f8024832b"
        );
    }

    #[test]
    fn sqrt_m1_squares_to_minus_one() {
        let minus_one = FieldElement::ZERO.sub(&FieldElement::ONE);
        assert_eq!(
            FieldElement::SQRT_M1.square().to_bytes(),
            minus_one.to_bytes()
        );
    }

    #[test]
    fn from_bytes_masks_the_sign_bit() {
        let mut b = bytes_of(5);
        assert_eq!(fe(&b).to_bytes(), bytes_of(5));
        b[31] |= 0x80;
        assert_eq!(fe(&b).to_bytes(), bytes_of(5));
    }

    #[test]
    fn non_canonical_values_reduce() {
        // p encodes as zero, p + 1 as one.
        let p = [
            0xED, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFF, 0xFF, 0xFF, 0x7F,
        ];
        assert_eq!(fe(&p).to_bytes(), [0u8; 32]);
        let mut p1 = p;
        p1[0] += 1;
        assert_eq!(fe(&p1).to_bytes(), bytes_of(1));
    }

    #[test]
    fn small_value_arithmetic() {
        let three = fe(&bytes_of(3));
        let four = fe(&bytes_of(4));
        assert_eq!(three.add(&four).to_bytes(), bytes_of(7));
        assert_eq!(four.sub(&three).to_bytes(), bytes_of(1));
        assert_eq!(three.mul(&four).to_bytes(), bytes_of(12));
        assert_eq!(four.square().to_bytes(), bytes_of(16));

        // 3 - 4 = p - 1
        let mut p_minus_1 = [0xFFu8; 32];
        p_minus_1[0] = 0xEC;
        p_minus_1[31] = 0x7F;
        assert_eq!(three.sub(&four).to_bytes(), p_minus_1);
        assert_eq!(FieldElement::ONE.neg().to_bytes(), p_minus_1);
    }

    #[test]
    fn sqrt_ratio_finds_roots_of_squares() {
        // 9/4 has root 3/2; verify r^2 * v == u.
        let u = fe(&bytes_of(9));
        let v = fe(&bytes_of(4));
        let (ok, r) = FieldElement::sqrt_ratio(&u, &v);
        assert!(ok);
        assert_eq!(r.square().mul(&v).to_bytes(), u.to_bytes());
        // The returned root is the even ("non-negative") one.
        assert!(!r.is_negative());
    }

    #[test]
    fn sqrt_ratio_rejects_non_squares() {
        // 2 is a non-residue mod p, so 2/1 has no root.
        let (ok, _) = FieldElement::sqrt_ratio(&fe(&bytes_of(2)), &FieldElement::ONE);
        assert!(!ok);
        // u = 0 always succeeds with root 0.
        let (ok, r) = FieldElement::sqrt_ratio(&FieldElement::ZERO, &fe(&bytes_of(4)));
        assert!(ok);
        assert_eq!(r.to_bytes(), [0u8; 32]);
    }
}
