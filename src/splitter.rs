//! Splitting a secret into shares

use std::collections::HashSet;

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::codec;
use crate::domain::{Secret, Share, ShareSet, SplitConfig, XCoordinates};
use crate::error::Result;
use crate::field::{FieldElement, P};
use crate::polynomial::Polynomial;

/// Split a secret into shares using the operating system's CSPRNG
///
/// # Errors
/// Returns an error if the secret cannot be encoded as a field element
pub fn split_secret(secret: &Secret, config: SplitConfig) -> Result<ShareSet> {
    split(secret, config, &mut OsRng)
}

/// Split a secret into `config.share_count()` shares, any `config.threshold()` of
/// which reconstruct it
///
/// Every issued x-coordinate is non-zero and distinct from the others.
///
/// # Errors
/// Returns [`crate::Error::Encoding`] if the secret cannot be encoded as a field element
pub fn split<R>(secret: &Secret, config: SplitConfig, rng: &mut R) -> Result<ShareSet>
where
    R: RngCore + CryptoRng,
{
    let threshold = config.threshold();
    let share_count = config.share_count();

    let encoded = codec::encode(secret)?;
    let polynomial = Polynomial::random(encoded, threshold, rng);
    let xs = x_coordinates(config, rng);

    let shares = xs
        .into_iter()
        .map(|x| {
            let y = polynomial.evaluate(&x);
            Share::new(x, y)
        })
        .collect();

    tracing::debug!(
        share_count = *share_count,
        threshold = *threshold,
        x_coordinates = ?config.x_coordinates(),
        "split secret"
    );

    Ok(ShareSet::new(threshold, shares))
}

fn x_coordinates<R>(config: SplitConfig, rng: &mut R) -> Vec<FieldElement>
where
    R: RngCore + CryptoRng,
{
    let count = usize::from(*config.share_count());
    match config.x_coordinates() {
        XCoordinates::Sequential => (1..=count as u64).map(FieldElement::from).collect(),
        XCoordinates::Random => {
            let one = BigUint::one();
            let mut seen = HashSet::with_capacity(count);
            let mut xs = Vec::with_capacity(count);
            while xs.len() < count {
                let candidate = FieldElement::reduce(rng.gen_biguint_range(&one, &P));
                if seen.insert(candidate.clone()) {
                    xs.push(candidate);
                }
            }
            xs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn config(n: u8, k: u8) -> SplitConfig {
        SplitConfig::from_counts(n, k).unwrap()
    }

    #[test]
    fn test_split_share_count() {
        let secret = Secret::new("a@b.com").unwrap();
        let set = split_secret(&secret, config(5, 3)).unwrap();
        assert_eq!(set.len(), 5);
        assert!(!set.is_empty());
        assert_eq!(*set.threshold(), 3);
    }

    #[test]
    fn test_sequential_x_coordinates() {
        let secret = Secret::new("a@b.com").unwrap();
        let set = split_secret(&secret, config(4, 2)).unwrap();
        let xs: Vec<_> = set.shares().iter().map(|s| s.x.clone()).collect();
        let expected: Vec<_> = (1..=4).map(FieldElement::from).collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn test_random_x_coordinates_distinct_and_non_zero() {
        let secret = Secret::new("a@b.com").unwrap();
        let cfg = config(20, 5).with_x_coordinates(XCoordinates::Random);
        let set = split_secret(&secret, cfg).unwrap();
        let xs: HashSet<_> = set.shares().iter().map(|s| s.x.clone()).collect();
        assert_eq!(xs.len(), 20);
        assert!(xs.iter().all(|x| !x.is_zero()));
    }

    #[test]
    fn test_threshold_one_shares_carry_secret() {
        let secret = Secret::new("solo").unwrap();
        let set = split_secret(&secret, config(3, 1)).unwrap();
        let encoded = codec::encode(&secret).unwrap();
        assert!(set.shares().iter().all(|s| s.y == encoded));
    }

    #[test]
    fn test_split_rejects_threshold_above_count() {
        assert!(matches!(
            SplitConfig::from_counts(3, 5),
            Err(Error::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_shares_differ_between_splits() {
        let secret = Secret::new("a@b.com").unwrap();
        let a = split_secret(&secret, config(3, 2)).unwrap();
        let b = split_secret(&secret, config(3, 2)).unwrap();
        assert_ne!(a.shares()[0].y, b.shares()[0].y);
    }
}
