//! Typed errors for splitting, reconstruction and custodian sealing
//!
//! Every variant is a local, non-retriable condition. Callers decide how to
//! surface them; nothing in this crate repairs malformed input.

/// Errors returned by the library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Threshold is zero or larger than the number of shares
    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),

    /// Share count is zero or does not fit in a `u8`
    #[error("invalid share count: {0}")]
    InvalidShareCount(String),

    /// Secret cannot be represented as a field element
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Reconstructed value or serialized share is not decodable
    #[error("decoding error: {0}")]
    Decoding(String),

    /// Two shares supplied for reconstruction have the same x-coordinate
    #[error("duplicate share: shares #{first} and #{second} have the same x-coordinate")]
    DuplicateShare { first: usize, second: usize },

    /// The same custodian key appears twice in one split
    #[error("duplicate custodian: {0}")]
    DuplicateCustodian(String),

    /// Sealed share could not be opened with the supplied key
    #[error("decryption error: {0}")]
    Decryption(String),

    /// Key material is malformed
    #[error("key error: {0}")]
    Key(String),
}

pub type Result<T> = std::result::Result<T, Error>;
