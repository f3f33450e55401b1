//! Custodian sealing for shares
//!
//! Each share is bound to exactly one custodian when it is sealed. There is no
//! API to move a sealed share to another custodian; that requires a new split.
//!
//! - **Identity**: X25519 keypairs; a custodian is a public key plus a contact
//!   string, identified by its [`Fingerprint`]
//! - **Sealing**: ephemeral ECDH + ChaCha20-Poly1305, see [`seal`]
//! - **Distribution**: a [`Sealer`] seals shares; [`LocalSealer`] uses the
//!   custodian public keys it is handed
//! - **Recovery**: an [`Unsealer`] opens records; [`Keyring`] is the
//!   in-memory implementation backed by PEM key files

mod keyring;
mod keys;
mod sealed;
mod sealer;

pub use keyring::{Keyring, Unsealer};
pub use keys::{CustodianKey, CustodianSecretKey, Fingerprint, KEY_SIZE, PRIVATE_KEY_TAG};
pub use sealed::{SEALED_SHARE_SIZE, SealedShare, SealedShareRecord, seal, unseal};
pub use sealer::{LocalSealer, Sealer};
