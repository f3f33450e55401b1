//! Custodian private keys held by the recovering party

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;

use super::keys::{CustodianSecretKey, Fingerprint};
use super::sealed::{self, SealedShareRecord};
use crate::domain::Share;
use crate::error::{Error, Result};

/// Opens sealed share records on behalf of their custodians
///
/// Implementations own the private keys or the connection to whatever service
/// holds them, so splitting and reconstruction never see key material.
/// Dropping the returned future cancels the call.
#[async_trait]
pub trait Unsealer: Send + Sync {
    /// Decrypt one record back into its share
    async fn unseal(&self, record: &SealedShareRecord) -> Result<Share>;
}

/// An in-memory set of custodian private keys, indexed by fingerprint
///
/// Build once at startup and share by reference (or `Arc`); it is never
/// mutated after construction.
#[derive(Debug, Default)]
pub struct Keyring {
    keys: BTreeMap<Fingerprint, CustodianSecretKey>,
}

impl Keyring {
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = CustodianSecretKey>) -> Self {
        Self {
            keys: keys
                .into_iter()
                .map(|key| (key.fingerprint(), key))
                .collect(),
        }
    }

    /// Load keys from PEM files
    ///
    /// # Errors
    /// Returns [`Error::Key`] if a file cannot be read or does not hold a
    /// custodian private key
    pub async fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut keys = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let pem = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| Error::Key(format!("failed to read {}: {e}", path.display())))?;
            let key = CustodianSecretKey::from_pem(&pem)
                .map_err(|e| Error::Key(format!("{}: {e}", path.display())))?;
            tracing::debug!(fingerprint = %key.fingerprint(), path = %path.display(), "loaded custodian key");
            keys.push(key);
        }
        Ok(Self::new(keys))
    }

    /// Whether this keyring can open `record`
    #[must_use]
    pub fn holds(&self, record: &SealedShareRecord) -> bool {
        self.keys.contains_key(&record.custodian_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[async_trait]
impl Unsealer for Keyring {
    async fn unseal(&self, record: &SealedShareRecord) -> Result<Share> {
        let key = self.keys.get(&record.custodian_id).ok_or_else(|| {
            Error::Decryption(format!(
                "no private key for custodian {} ({})",
                record.custodian_id, record.contact
            ))
        })?;
        sealed::unseal(&record.sealed_share()?, key)
    }
}
