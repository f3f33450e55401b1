use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use zeroize::Zeroizing;

use crate::codec;
use crate::config::{CustodianEntry, VaultConfig};
use crate::domain::{Secret, SplitConfig};
use crate::reconstruct::reconstruct;
use crate::service;
use crate::splitter::split_secret;
use crate::vault::{CustodianSecretKey, Keyring, SealedShareRecord};

/// Split a secret into plain-text shares
///
/// Returns the shares as decimal text, two lines per share.
///
/// # Errors
/// Returns an error if the secret is invalid or cannot be encoded
pub fn split_plain(secret: &str, config: SplitConfig) -> Result<Zeroizing<String>> {
    let secret = Secret::new(secret).context("Invalid secret")?;
    let shares = split_secret(&secret, config).context("Failed to split secret")?;
    Ok(codec::format_shares(shares.shares()))
}

/// Combine plain-text shares to reconstruct the secret
///
/// # Errors
/// Returns an error if the shares cannot be parsed or do not reconstruct a valid secret
pub fn combine_plain(share_text: &str) -> Result<Zeroizing<String>> {
    let shares = codec::parse_shares(share_text).context("Failed to parse shares")?;
    if shares.is_empty() {
        bail!("No shares provided");
    }

    let secret = reconstruct(&shares).context("Failed to recover secret")?;
    Ok(Zeroizing::new(secret.as_str().to_string()))
}

/// Generate a custodian keypair and write the private key to `out_dir`
///
/// Returns the path of the PEM file and the config entry for the public key.
///
/// # Errors
/// Returns an error if the directory cannot be created or the key file already exists
pub fn keygen(contact: &str, out_dir: &Path) -> Result<(PathBuf, CustodianEntry)> {
    let key = CustodianSecretKey::generate();
    let custodian = key.custodian(contact);

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let path = out_dir.join(format!("{}.pem", custodian.fingerprint()));

    let mut options = std::fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options
        .open(&path)
        .with_context(|| format!("Failed to create key file {}", path.display()))?;
    file.write_all(key.to_pem().as_bytes())
        .with_context(|| format!("Failed to write key file {}", path.display()))?;

    tracing::info!(fingerprint = %custodian.fingerprint(), path = %path.display(), "generated custodian key");
    Ok((path, CustodianEntry::from(&custodian)))
}

/// Split a secret and seal one share per configured custodian
///
/// Returns the sealed records as pretty-printed JSON.
///
/// # Errors
/// Returns an error if the config is invalid, splitting fails, or sealing fails
pub fn seal_secret(secret: &str, config: &VaultConfig) -> Result<String> {
    let custodians = config.custodian_keys()?;
    let records =
        service::split_and_distribute(secret, &custodians, config.threshold, config.x_coordinates)
            .context("Failed to seal shares")?;
    serde_json::to_string_pretty(&records).context("Failed to serialize records")
}

/// Unseal the records `keyring` holds keys for and reconstruct the secret
///
/// Records for custodians whose keys are not in the keyring are skipped.
///
/// # Errors
/// Returns an error if the records cannot be parsed, none match the keyring,
/// or reconstruction fails
pub async fn recover(records_json: &str, keyring: &Keyring) -> Result<Zeroizing<String>> {
    let records: Vec<SealedShareRecord> =
        serde_json::from_str(records_json).context("Failed to parse records")?;
    if records.is_empty() {
        bail!("No records provided");
    }

    let (quorum, skipped): (Vec<_>, Vec<_>) =
        records.into_iter().partition(|record| keyring.holds(record));
    for record in &skipped {
        tracing::debug!(custodian = %record.custodian_id, "no key for record, skipping");
    }
    if quorum.is_empty() {
        bail!("None of the records match the supplied keys");
    }

    let secret = service::reconstruct_from_quorum(&quorum, keyring)
        .await
        .with_context(|| format!("Failed to recover secret from {} shares", quorum.len()))?;
    Ok(Zeroizing::new(secret.as_str().to_string()))
}
