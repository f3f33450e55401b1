//! Property tests for split/reconstruct workflows

use std::collections::HashSet;

use quickcheck_macros::quickcheck;
use shamir_vault::domain::{SplitConfig, XCoordinates};
use shamir_vault::reconstruct::reconstruct;
use shamir_vault::splitter::split_secret;

use crate::support::{ValidParams, ValidSecret, shuffled_indices};

fn config(params: ValidParams, random_x: bool) -> SplitConfig {
    let x_coordinates = if random_x {
        XCoordinates::Random
    } else {
        XCoordinates::Sequential
    };
    SplitConfig::from_counts(params.num_shares, params.threshold)
        .unwrap()
        .with_x_coordinates(x_coordinates)
}

/// Splitting and reconstructing from the first threshold shares recovers the secret
#[quickcheck]
fn prop_split_reconstruct_round_trip(secret: ValidSecret, params: ValidParams, random_x: bool) -> bool {
    let ValidSecret(secret) = secret;
    let Ok(set) = split_secret(&secret, config(params, random_x)) else {
        return false;
    };
    if set.len() != usize::from(params.num_shares) {
        return false;
    }

    let selected = &set.shares()[..usize::from(params.threshold)];
    reconstruct(selected).is_ok_and(|recovered| recovered == secret)
}

/// Any selection of at least threshold shares, in any order, recovers the secret
#[quickcheck]
fn prop_random_share_selection_works(
    secret: ValidSecret,
    params: ValidParams,
    selection_seed: u64,
    extra: u8,
) -> bool {
    let ValidSecret(secret) = secret;
    let set = split_secret(&secret, config(params, true)).unwrap();

    let spare = params.num_shares - params.threshold;
    let take = usize::from(params.threshold + extra % (spare + 1));
    let selected: Vec<_> = shuffled_indices(set.len(), selection_seed)
        .into_iter()
        .take(take)
        .map(|idx| set.shares()[idx].clone())
        .collect();

    reconstruct(&selected).is_ok_and(|recovered| recovered == secret)
}

/// One share fewer than the threshold never yields the secret
#[quickcheck]
fn prop_insufficient_shares_fail(secret: ValidSecret, params: ValidParams) -> bool {
    // A threshold of one leaves nothing to withhold
    if params.threshold < 2 {
        return true;
    }

    let ValidSecret(secret) = secret;
    let set = split_secret(&secret, config(params, false)).unwrap();
    let insufficient = &set.shares()[..usize::from(params.threshold - 1)];

    reconstruct(insufficient).map_or(true, |recovered| recovered != secret)
}

/// Share x coordinates are distinct and nonzero
#[quickcheck]
fn prop_x_coordinates_distinct(secret: ValidSecret, params: ValidParams, random_x: bool) -> bool {
    let ValidSecret(secret) = secret;
    let set = split_secret(&secret, config(params, random_x)).unwrap();

    let mut seen = HashSet::new();
    set.shares()
        .iter()
        .all(|share| !share.x.is_zero() && seen.insert(share.x.to_be_bytes()))
}

/// The share set records the requested threshold
#[quickcheck]
fn prop_threshold_preserved(secret: ValidSecret, params: ValidParams) -> bool {
    let ValidSecret(secret) = secret;
    let set = split_secret(&secret, config(params, false)).unwrap();
    *set.threshold() == params.threshold
}
