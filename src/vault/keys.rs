//! Custodian identities and private keys
//!
//! A custodian is identified by the [`Fingerprint`] of its X25519 public key.
//! Private keys are stored as PEM with the [`PRIVATE_KEY_TAG`] tag.

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use x25519_dalek::{PublicKey, StaticSecret};

use crate::error::{Error, Result};

/// Size of an X25519 key in bytes
pub const KEY_SIZE: usize = 32;

/// Bytes of SHA-256 kept in a fingerprint
const FINGERPRINT_BYTES: usize = 20;

/// PEM tag for custodian private keys
pub const PRIVATE_KEY_TAG: &str = "CUSTODIAN PRIVATE KEY";

/// Hex fingerprint identifying a custodian key
///
/// The first 20 bytes of SHA-256 over the public key, lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    fn of(public: &PublicKey) -> Self {
        let digest = Sha256::digest(public.as_bytes());
        Self(hex::encode(&digest[..FINGERPRINT_BYTES]))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A custodian's public identity: an X25519 public key and a contact string
///
/// # Examples
///
/// ```rust
/// use shamir_vault::vault::CustodianSecretKey;
///
/// let secret = CustodianSecretKey::generate();
/// let custodian = secret.custodian("alice@example.org");
/// assert_eq!(custodian.fingerprint(), &secret.fingerprint());
/// assert_eq!(custodian.fingerprint().as_str().len(), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustodianKey {
    contact: String,
    public: PublicKey,
    fingerprint: Fingerprint,
}

impl CustodianKey {
    #[must_use]
    pub fn new(contact: impl Into<String>, public: PublicKey) -> Self {
        let fingerprint = Fingerprint::of(&public);
        Self {
            contact: contact.into(),
            public,
            fingerprint,
        }
    }

    /// Parse a custodian from a hex public key
    ///
    /// Accepts both plain hex and "0x"-prefixed hex strings.
    ///
    /// # Errors
    /// Returns [`Error::Key`] if the hex is malformed or not 32 bytes
    pub fn from_hex(contact: impl Into<String>, hex_key: &str) -> Result<Self> {
        let hex_key = hex_key.strip_prefix("0x").unwrap_or(hex_key);
        let mut buff = [0u8; KEY_SIZE];
        hex::decode_to_slice(hex_key, &mut buff)
            .map_err(|e| Error::Key(format!("public key hex decode error: {e}")))?;
        Ok(Self::new(contact, PublicKey::from(buff)))
    }

    #[must_use]
    pub fn contact(&self) -> &str {
        &self.contact
    }

    #[must_use]
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    #[must_use]
    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Public key as lowercase hex
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.public.as_bytes())
    }
}

/// A custodian's private key
///
/// Never handed to the splitting or reconstruction code; only an
/// [`Unsealer`](super::Unsealer) holds these.
#[derive(Clone)]
pub struct CustodianSecretKey {
    secret: StaticSecret,
    public: PublicKey,
}

impl CustodianSecretKey {
    /// Generate a new key with the operating system's CSPRNG
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rngs::OsRng)
    }

    /// Generate a new key from a caller-supplied CSPRNG
    #[must_use]
    pub fn generate_with<R>(rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng,
    {
        Self::from(StaticSecret::random_from_rng(rng))
    }

    #[must_use]
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(&self.public)
    }

    /// The public identity for this key
    #[must_use]
    pub fn custodian(&self, contact: impl Into<String>) -> CustodianKey {
        CustodianKey::new(contact, self.public)
    }

    pub(crate) fn diffie_hellman(&self, peer: &PublicKey) -> x25519_dalek::SharedSecret {
        self.secret.diffie_hellman(peer)
    }

    /// Encode the key in PEM format for storage
    #[must_use]
    pub fn to_pem(&self) -> String {
        let pem = pem::Pem::new(PRIVATE_KEY_TAG, self.secret.to_bytes().to_vec());
        pem::encode(&pem)
    }

    /// Parse a key from PEM format
    ///
    /// # Errors
    /// Returns [`Error::Key`] if the PEM is malformed, has the wrong tag, or the
    /// wrong key size
    pub fn from_pem(pem_str: &str) -> Result<Self> {
        let pem = pem::parse(pem_str).map_err(|e| Error::Key(format!("failed to parse PEM: {e}")))?;

        if pem.tag() != PRIVATE_KEY_TAG {
            return Err(Error::Key(format!(
                "invalid PEM tag, expected {PRIVATE_KEY_TAG}, got {}",
                pem.tag()
            )));
        }

        let bytes: [u8; KEY_SIZE] = pem.contents().try_into().map_err(|_| {
            Error::Key(format!(
                "invalid private key size in PEM, expected {KEY_SIZE}, got {}",
                pem.contents().len()
            ))
        })?;
        Ok(Self::from(StaticSecret::from(bytes)))
    }
}

impl From<StaticSecret> for CustodianSecretKey {
    fn from(secret: StaticSecret) -> Self {
        let public = PublicKey::from(&secret);
        Self { secret, public }
    }
}

impl std::fmt::Debug for CustodianSecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustodianSecretKey")
            .field("fingerprint", &self.fingerprint())
            .finish_non_exhaustive()
    }
}
