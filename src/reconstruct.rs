//! Recombining shares by Lagrange interpolation at `x = 0`

use std::collections::HashMap;

use crate::codec;
use crate::domain::{Secret, Share};
use crate::error::{Error, Result};
use crate::field::FieldElement;

/// Reconstruct a secret from a set of shares
///
/// All supplied shares are used. Supplying fewer shares than the threshold the
/// secret was split with yields an unrelated value, which almost always fails to
/// decode and otherwise decodes to a different string; there is no way to tell
/// the two cases apart from a correct quorum.
///
/// # Errors
/// - [`Error::Decoding`] if no shares are given, a share has `x = 0`, or the
///   interpolated value is not a valid secret
/// - [`Error::DuplicateShare`] if two shares have the same x-coordinate
pub fn reconstruct(shares: &[Share]) -> Result<Secret> {
    if shares.is_empty() {
        return Err(Error::Decoding("no shares provided".to_string()));
    }
    check_coordinates(shares)?;

    let value = interpolate_at_zero(shares)?;
    let secret = codec::decode(&value)?;

    tracing::debug!(share_count = shares.len(), "reconstructed secret");
    Ok(secret)
}

fn check_coordinates(shares: &[Share]) -> Result<()> {
    let mut seen: HashMap<&FieldElement, usize> = HashMap::with_capacity(shares.len());
    for (idx, share) in shares.iter().enumerate() {
        if share.x.is_zero() {
            return Err(Error::Decoding(format!(
                "share #{} has a zero x-coordinate",
                idx + 1
            )));
        }
        if let Some(first) = seen.insert(&share.x, idx) {
            return Err(Error::DuplicateShare {
                first: first + 1,
                second: idx + 1,
            });
        }
    }
    Ok(())
}

/// `Σ yᵢ · Π_{j≠i} (−xⱼ)·(xᵢ − xⱼ)⁻¹`
fn interpolate_at_zero(shares: &[Share]) -> Result<FieldElement> {
    let mut acc = FieldElement::zero();
    for (i, share_i) in shares.iter().enumerate() {
        let mut basis = FieldElement::one();
        for (j, share_j) in shares.iter().enumerate() {
            if i == j {
                continue;
            }
            // Distinct x-coordinates were checked above
            let inverse = share_i
                .x
                .sub(&share_j.x)
                .inverse()
                .ok_or(Error::DuplicateShare {
                    first: i.min(j) + 1,
                    second: i.max(j) + 1,
                })?;
            basis = basis.mul(&share_j.x.neg()).mul(&inverse);
        }
        acc = acc.add(&share_i.y.mul(&basis));
    }
    Ok(acc)
}
