//! Sealing shares on behalf of the splitting party

use async_trait::async_trait;
use rand::rngs::OsRng;

use super::keys::CustodianKey;
use super::sealed::{self, SealedShare};
use crate::domain::Share;
use crate::error::Result;

/// Encrypts shares to custodians
///
/// The counterpart of [`Unsealer`](super::Unsealer). Implementations may look up
/// or verify custodian keys remotely before sealing. Dropping the returned
/// future cancels the call.
#[async_trait]
pub trait Sealer: Send + Sync {
    /// Seal one share to `custodian`
    async fn seal(&self, share: &Share, custodian: &CustodianKey) -> Result<SealedShare>;
}

/// Seals locally with the public key already carried by the [`CustodianKey`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSealer;

#[async_trait]
impl Sealer for LocalSealer {
    async fn seal(&self, share: &Share, custodian: &CustodianKey) -> Result<SealedShare> {
        sealed::seal(share, custodian, &mut OsRng)
    }
}
