//! Arithmetic in the prime field of order `P = 2^521 - 1`
//!
//! `P` is the 13th Mersenne prime. Every [`FieldElement`] holds a value in
//! `[0, P)`; constructors either reduce or reject.

use std::sync::LazyLock;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Bit length of the modulus
pub const MODULUS_BITS: u64 = 521;

/// Fixed width of a big-endian serialized field element
pub const FIELD_BYTES: usize = 66;

/// The field modulus `2^521 - 1`
pub static P: LazyLock<BigUint> = LazyLock::new(|| (BigUint::one() << MODULUS_BITS) - 1u32);

/// Modular multiplicative inverse via the extended Euclidean algorithm
///
/// Returns `None` when `a` has no inverse modulo `p`, which for a prime modulus
/// only happens when `a ≡ 0`. The result is normalized into `[0, p)`.
#[must_use]
pub fn mod_inverse(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let a = a % p;
    if a.is_zero() {
        return None;
    }

    let modulus = BigInt::from(p.clone());
    let (mut old_r, mut r) = (BigInt::from(a), modulus.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let quotient = &old_r / &r;
        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return None;
    }

    (((old_s % &modulus) + &modulus) % &modulus).to_biguint()
}

/// An element of the field `Z/PZ`
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FieldElement(BigUint);

impl FieldElement {
    /// Wraps `value` if it is already in `[0, P)`
    #[must_use]
    pub fn new(value: BigUint) -> Option<Self> {
        (value < *P).then_some(Self(value))
    }

    /// Reduces an arbitrary integer into the field
    #[must_use]
    pub fn reduce(value: BigUint) -> Self {
        Self(value % &*P)
    }

    #[must_use]
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    #[must_use]
    pub fn one() -> Self {
        Self(BigUint::one())
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::reduce(&self.0 + &other.0)
    }

    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self::reduce(&self.0 + &*P - &other.0)
    }

    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self::reduce(&self.0 * &other.0)
    }

    #[must_use]
    pub fn neg(&self) -> Self {
        Self::zero().sub(self)
    }

    /// Multiplicative inverse, `None` for zero
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        mod_inverse(&self.0, &P).map(Self)
    }

    /// Underlying integer value
    #[must_use]
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Big-endian bytes left-padded to [`FIELD_BYTES`]
    #[must_use]
    pub fn to_be_bytes(&self) -> [u8; FIELD_BYTES] {
        let bytes = self.0.to_bytes_be();
        let mut out = [0u8; FIELD_BYTES];
        // Values below P need at most FIELD_BYTES bytes
        out[FIELD_BYTES - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    /// Parses a [`FIELD_BYTES`]-wide big-endian value, rejecting values `>= P`
    #[must_use]
    pub fn from_be_bytes(bytes: &[u8; FIELD_BYTES]) -> Option<Self> {
        Self::new(BigUint::from_bytes_be(bytes))
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl std::fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FieldElement").field(&self.0).finish()
    }
}

impl std::fmt::Display for FieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
