//! Sealing shares to custodian public keys
//!
//! A share is encrypted to a custodian with an ephemeral X25519 key agreement:
//! 1. **Generate ephemeral keypair** and compute the shared secret with the
//!    custodian's public key
//! 2. **Derive key**: SHA-256 over a label, the shared secret and both public keys
//! 3. **Encrypt**: ChaCha20-Poly1305 with a random nonce, the custodian public key
//!    as associated data
//!
//! # Wire Format
//!
//! ```text
//! [ ephemeral_pubkey: 32 bytes ][ nonce: 12 bytes ][ ciphertext: 132 bytes ][ tag: 16 bytes ]
//! ```

use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use x25519_dalek::{EphemeralSecret, PublicKey};
use zeroize::Zeroizing;

use super::keys::{CustodianKey, CustodianSecretKey, Fingerprint, KEY_SIZE};
use crate::codec::{self, SHARE_BYTES};
use crate::domain::Share;
use crate::error::{Error, Result};

/// Size of the AEAD nonce in bytes
pub const NONCE_SIZE: usize = 12;
/// Size of the AEAD authentication tag in bytes
pub const TAG_SIZE: usize = 16;
/// Total size of a sealed share in bytes
pub const SEALED_SHARE_SIZE: usize = KEY_SIZE + NONCE_SIZE + SHARE_BYTES + TAG_SIZE;

const KDF_LABEL: &[u8] = b"shamir-vault share seal v1";

/// A share encrypted to one custodian
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SealedShare(Vec<u8>);

impl SealedShare {
    /// Get a reference to the raw sealed bytes
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl TryFrom<&[u8]> for SealedShare {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SEALED_SHARE_SIZE {
            return Err(Error::Decryption(format!(
                "invalid sealed share size, expected {SEALED_SHARE_SIZE}, got {}",
                bytes.len()
            )));
        }
        Ok(Self(bytes.to_vec()))
    }
}

/// A sealed share tagged with the custodian it was sealed to
///
/// This is what the surrounding system persists. `ciphertext` serializes as hex
/// and must be stored byte-exact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedShareRecord {
    pub custodian_id: Fingerprint,
    pub contact: String,
    #[serde(with = "hex::serde")]
    pub ciphertext: Vec<u8>,
}

impl SealedShareRecord {
    /// The sealed share carried by this record
    ///
    /// # Errors
    /// Returns [`Error::Decryption`] if the ciphertext has the wrong size
    pub fn sealed_share(&self) -> Result<SealedShare> {
        SealedShare::try_from(self.ciphertext.as_slice())
    }
}

/// Encrypt a share to a custodian's public key
///
/// # Errors
/// Returns [`Error::Decryption`] if the custodian key is a low-order point or
/// encryption fails
pub fn seal<R>(share: &Share, custodian: &CustodianKey, rng: &mut R) -> Result<SealedShare>
where
    R: RngCore + CryptoRng,
{
    let ephemeral = EphemeralSecret::random_from_rng(&mut *rng);
    let ephemeral_public = PublicKey::from(&ephemeral);
    let shared = ephemeral.diffie_hellman(custodian.public());
    if !shared.was_contributory() {
        return Err(Error::Decryption(
            "custodian public key is a low-order point".to_string(),
        ));
    }

    let key = derive_key(shared.as_bytes(), &ephemeral_public, custodian.public());
    let mut nonce = [0u8; NONCE_SIZE];
    rng.fill_bytes(&mut nonce);

    let plaintext = codec::share_to_bytes(share);
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_slice()));
    let ciphertext = cipher
        .encrypt(
            Nonce::from_slice(&nonce),
            Payload {
                msg: plaintext.as_slice(),
                aad: custodian.public().as_bytes(),
            },
        )
        .map_err(|_| Error::Decryption("share encryption failed".to_string()))?;

    let mut sealed = Vec::with_capacity(SEALED_SHARE_SIZE);
    sealed.extend_from_slice(ephemeral_public.as_bytes());
    sealed.extend_from_slice(&nonce);
    sealed.extend_from_slice(&ciphertext);
    Ok(SealedShare(sealed))
}

/// Decrypt a sealed share with the custodian's private key
///
/// # Errors
/// Returns [`Error::Decryption`] if the key does not match the one the share was
/// sealed to or the data was corrupted, and [`Error::Decoding`] if the decrypted
/// bytes are not a valid share
pub fn unseal(sealed: &SealedShare, secret_key: &CustodianSecretKey) -> Result<Share> {
    let bytes = sealed.bytes();
    let (ephemeral_bytes, rest) = bytes.split_at(KEY_SIZE);
    let (nonce, ciphertext) = rest.split_at(NONCE_SIZE);

    let mut buff = [0u8; KEY_SIZE];
    buff.copy_from_slice(ephemeral_bytes);
    let ephemeral_public = PublicKey::from(buff);

    let shared = secret_key.diffie_hellman(&ephemeral_public);
    if !shared.was_contributory() {
        return Err(Error::Decryption(
            "sealed share has a low-order ephemeral key".to_string(),
        ));
    }

    let key = derive_key(shared.as_bytes(), &ephemeral_public, secret_key.public());
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_slice()));
    let plaintext = Zeroizing::new(
        cipher
            .decrypt(
                Nonce::from_slice(nonce),
                Payload {
                    msg: ciphertext,
                    aad: secret_key.public().as_bytes(),
                },
            )
            .map_err(|_| {
                Error::Decryption("key does not match or sealed share is corrupted".to_string())
            })?,
    );

    codec::share_from_bytes(&plaintext)
}

fn derive_key(
    shared: &[u8; KEY_SIZE],
    ephemeral_public: &PublicKey,
    recipient: &PublicKey,
) -> Zeroizing<[u8; KEY_SIZE]> {
    let digest = Sha256::new()
        .chain_update(KDF_LABEL)
        .chain_update(shared)
        .chain_update(ephemeral_public.as_bytes())
        .chain_update(recipient.as_bytes())
        .finalize();
    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    key.copy_from_slice(&digest);
    key
}

#[cfg(test)]
mod tests {
    use rand::rngs::OsRng;

    use super::*;
    use crate::field::FieldElement;

    fn sample_share() -> Share {
        Share::new(FieldElement::from(3), FieldElement::one().neg())
    }

    #[test]
    fn test_seal_unseal() {
        let key = CustodianSecretKey::generate();
        let custodian = key.custodian("alice@example.org");
        let share = sample_share();
        let sealed = seal(&share, &custodian, &mut OsRng).unwrap();
        assert_eq!(sealed.bytes().len(), SEALED_SHARE_SIZE);
        assert_eq!(unseal(&sealed, &key).unwrap(), share);
    }

    #[test]
    fn test_unseal_wrong_key() {
        let alice = CustodianSecretKey::generate();
        let bob = CustodianSecretKey::generate();
        let sealed = seal(&sample_share(), &alice.custodian("alice"), &mut OsRng).unwrap();
        assert!(matches!(unseal(&sealed, &bob), Err(Error::Decryption(_))));
    }

    #[test]
    fn test_unseal_tampered() {
        let key = CustodianSecretKey::generate();
        let sealed = seal(&sample_share(), &key.custodian("alice"), &mut OsRng).unwrap();
        let mut bytes = sealed.into_bytes();
        bytes[KEY_SIZE + NONCE_SIZE] ^= 0x01;
        let tampered = SealedShare::try_from(bytes.as_slice()).unwrap();
        assert!(matches!(unseal(&tampered, &key), Err(Error::Decryption(_))));
    }

    #[test]
    fn test_sealing_is_randomized() {
        let key = CustodianSecretKey::generate();
        let custodian = key.custodian("alice");
        let a = seal(&sample_share(), &custodian, &mut OsRng).unwrap();
        let b = seal(&sample_share(), &custodian, &mut OsRng).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_sealed_share_wrong_size() {
        assert!(SealedShare::try_from(&[0u8; SEALED_SHARE_SIZE - 1][..]).is_err());
    }

    #[test]
    fn test_low_order_custodian_key_rejected() {
        let custodian = CustodianKey::new("zero", PublicKey::from([0u8; KEY_SIZE]));
        assert!(matches!(
            seal(&sample_share(), &custodian, &mut OsRng),
            Err(Error::Decryption(_))
        ));
    }

    #[test]
    fn test_record_json_round_trip() {
        let key = CustodianSecretKey::generate();
        let custodian = key.custodian("alice@example.org");
        let sealed = seal(&sample_share(), &custodian, &mut OsRng).unwrap();
        let record = SealedShareRecord {
            custodian_id: custodian.fingerprint().clone(),
            contact: custodian.contact().to_string(),
            ciphertext: sealed.into_bytes(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(&hex::encode(&record.ciphertext)));
        let parsed: SealedShareRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
        assert_eq!(unseal(&parsed.sealed_share().unwrap(), &key).unwrap(), sample_share());
    }
}
