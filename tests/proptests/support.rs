//! Generators shared by the property tests

use quickcheck::{Arbitrary, Gen};
use shamir_vault::domain::{MAX_LENGTH, Secret};

/// Wrapper for strings that are valid secrets
///
/// Arbitrary strings are truncated to `MAX_LENGTH` bytes on a char boundary,
/// with trailing NULs stripped and empty results replaced.
#[derive(Clone, Debug)]
pub struct ValidSecret(pub Secret);

impl Arbitrary for ValidSecret {
    fn arbitrary(g: &mut Gen) -> Self {
        let raw = String::arbitrary(g);

        let mut end = raw.len().min(MAX_LENGTH);
        while !raw.is_char_boundary(end) {
            end -= 1;
        }
        let trimmed = raw[..end].trim_end_matches('\0');
        let value = if trimmed.is_empty() { "a@b.com" } else { trimmed };

        ValidSecret(Secret::new(value).unwrap())
    }
}

/// Wrapper for valid threshold and share count pairs
#[derive(Clone, Copy, Debug)]
pub struct ValidParams {
    pub threshold: u8,
    pub num_shares: u8,
}

impl Arbitrary for ValidParams {
    fn arbitrary(g: &mut Gen) -> Self {
        // Keep the share count small, interpolation is quadratic
        let num_shares = (u8::arbitrary(g) % 12) + 1; // 1..=12
        let threshold = (u8::arbitrary(g) % num_shares) + 1; // 1..=num_shares

        ValidParams {
            threshold,
            num_shares,
        }
    }
}

/// Deterministic shuffle of `0..len` driven by `seed`
pub fn shuffled_indices(len: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    let mut seed = seed;
    for i in 0..indices.len() {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let range = (indices.len() - i) as u64;
        let j = i + usize::try_from((seed >> 33) % range).unwrap_or(0);
        indices.swap(i, j);
    }
    indices
}
