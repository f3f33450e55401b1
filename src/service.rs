//! Operations exposed to the surrounding account workflows
//!
//! - [`split_and_distribute`] splits a secret and seals one share per custodian
//! - [`split_and_distribute_with`] does the same through a caller-supplied
//!   [`Sealer`]
//! - [`reconstruct_from_quorum`] unseals records through a caller-supplied
//!   [`Unsealer`] and recombines them
//! - [`is_reconstructable`] is a cheap guard before attempting recovery
//!
//! Persisting the returned [`SealedShareRecord`]s is the caller's job.

use std::collections::HashSet;

use rand::rngs::OsRng;

use crate::domain::{Secret, ShareCount, ShareSet, SplitConfig, Threshold, XCoordinates};
use crate::error::{Error, Result};
use crate::reconstruct::reconstruct;
use crate::splitter::split;
use crate::vault::{CustodianKey, SealedShare, SealedShareRecord, Sealer, Unsealer, seal};

/// Split `secret` into one sealed share per custodian
///
/// The share count is the number of custodians. A missing or zero threshold
/// defaults to a simple majority. Share `i` is sealed to `custodians[i]`.
///
/// # Errors
/// - [`Error::InvalidShareCount`] if `custodians` is empty or has more than 255 entries
/// - [`Error::InvalidThreshold`] if `threshold` exceeds the custodian count
/// - [`Error::DuplicateCustodian`] if a custodian key appears twice
/// - [`Error::Encoding`] if the secret cannot be encoded
/// - [`Error::Decryption`] if a custodian key cannot be sealed to
pub fn split_and_distribute(
    secret: &str,
    custodians: &[CustodianKey],
    threshold: Option<u8>,
    x_coordinates: XCoordinates,
) -> Result<Vec<SealedShareRecord>> {
    let mut rng = OsRng;
    let shares = split_for_custodians(secret, custodians, threshold, x_coordinates, &mut rng)?;

    let records = shares
        .into_iter()
        .zip(custodians)
        .map(|(share, custodian)| Ok(record(custodian, seal(&share, custodian, &mut rng)?)))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(share_count = records.len(), "sealed shares to custodians");
    Ok(records)
}

/// Like [`split_and_distribute`], sealing each share through `sealer`
///
/// Shares are sealed one at a time in custodian order.
///
/// # Errors
/// The same as [`split_and_distribute`], plus any error returned by `sealer`
pub async fn split_and_distribute_with<S>(
    secret: &str,
    custodians: &[CustodianKey],
    threshold: Option<u8>,
    x_coordinates: XCoordinates,
    sealer: &S,
) -> Result<Vec<SealedShareRecord>>
where
    S: Sealer + ?Sized,
{
    let shares = split_for_custodians(secret, custodians, threshold, x_coordinates, &mut OsRng)?;

    let mut records = Vec::with_capacity(custodians.len());
    for (share, custodian) in shares.into_iter().zip(custodians) {
        let sealed = sealer.seal(&share, custodian).await.inspect_err(|e| {
            tracing::warn!(custodian = %custodian.fingerprint(), error = %e, "failed to seal share");
        })?;
        records.push(record(custodian, sealed));
    }

    tracing::info!(share_count = records.len(), "sealed shares to custodians");
    Ok(records)
}

fn split_for_custodians(
    secret: &str,
    custodians: &[CustodianKey],
    threshold: Option<u8>,
    x_coordinates: XCoordinates,
    rng: &mut OsRng,
) -> Result<ShareSet> {
    let secret = Secret::new(secret)?;
    let share_count = ShareCount::from_len(custodians.len())?;
    let threshold = threshold.and_then(Threshold::requested);
    let config = SplitConfig::new(share_count, threshold)?.with_x_coordinates(x_coordinates);

    let mut seen = HashSet::with_capacity(custodians.len());
    for custodian in custodians {
        if !seen.insert(custodian.fingerprint()) {
            return Err(Error::DuplicateCustodian(format!(
                "{} ({})",
                custodian.fingerprint(),
                custodian.contact()
            )));
        }
    }

    let shares = split(&secret, config, rng)?;
    tracing::debug!(threshold = *config.threshold(), "split secret for custodians");
    Ok(shares)
}

fn record(custodian: &CustodianKey, sealed: SealedShare) -> SealedShareRecord {
    SealedShareRecord {
        custodian_id: custodian.fingerprint().clone(),
        contact: custodian.contact().to_string(),
        ciphertext: sealed.into_bytes(),
    }
}

/// Unseal `records` with `unsealer` and reconstruct the secret
///
/// Every record is used; pass only the quorum that should take part.
///
/// # Errors
/// Returns the first unseal error, or any reconstruction error
pub async fn reconstruct_from_quorum<U>(
    records: &[SealedShareRecord],
    unsealer: &U,
) -> Result<Secret>
where
    U: Unsealer + ?Sized,
{
    let mut shares = Vec::with_capacity(records.len());
    for record in records {
        let share = unsealer.unseal(record).await.inspect_err(|e| {
            tracing::warn!(custodian = %record.custodian_id, error = %e, "failed to unseal share");
        })?;
        shares.push(share);
    }

    let secret = reconstruct(&shares)?;
    tracing::info!(share_count = shares.len(), "reconstructed secret from quorum");
    Ok(secret)
}

/// Whether `record_count` records can meet `threshold`
#[must_use]
pub fn is_reconstructable(record_count: usize, threshold: u8) -> bool {
    threshold >= 1 && record_count >= usize::from(threshold)
}
