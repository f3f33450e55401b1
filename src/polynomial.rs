//! Random sharing polynomials over the prime field

use num_bigint::RandBigInt;
use rand::{CryptoRng, RngCore};

use crate::domain::Threshold;
use crate::field::{FieldElement, P};

/// A polynomial `c0 + c1·x + … + c(k-1)·x^(k-1)` with the secret as `c0`
pub struct Polynomial {
    coefficients: Vec<FieldElement>,
}

impl Polynomial {
    /// Builds a polynomial of degree `threshold - 1` with `secret` as the constant term
    ///
    /// The remaining coefficients are uniform in `[0, P)`. The `CryptoRng`
    /// bound keeps general-purpose PRNGs out.
    pub fn random<R>(secret: FieldElement, threshold: Threshold, rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng,
    {
        let mut coefficients = Vec::with_capacity(usize::from(*threshold));
        coefficients.push(secret);
        for _ in 1..*threshold {
            coefficients.push(FieldElement::reduce(rng.gen_biguint_below(&*P)));
        }
        Self { coefficients }
    }

    /// Polynomial with explicit coefficients, lowest degree first
    #[cfg(test)]
    pub(crate) fn from_coefficients(coefficients: Vec<FieldElement>) -> Self {
        Self { coefficients }
    }

    /// Degree of the polynomial
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluates `Σ cᵢ·xⁱ mod P` with Horner's rule
    ///
    /// `evaluate(0)` is the secret, so `x = 0` must never be issued as a share.
    #[must_use]
    pub fn evaluate(&self, x: &FieldElement) -> FieldElement {
        self.coefficients
            .iter()
            .rev()
            .fold(FieldElement::zero(), |acc, c| acc.mul(x).add(c))
    }
}

impl std::fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Polynomial")
            .field("degree", &self.degree())
            .finish_non_exhaustive()
    }
}
