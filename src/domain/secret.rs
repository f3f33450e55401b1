//! `Secret` newtype for the identifier being shared

use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Maximum secret length in bytes
pub const MAX_LENGTH: usize = 64;

/// A UTF-8 secret of 1..=[`MAX_LENGTH`] bytes
///
/// Wraps the string in `Zeroizing` to ensure secure memory cleanup. The
/// `Debug` impl never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Zeroizing<String>);

impl Secret {
    /// Creates a new secret
    ///
    /// Trailing NUL characters are rejected since they are indistinguishable
    /// from encoding padding.
    ///
    /// # Errors
    /// Returns [`Error::Encoding`] if the secret is empty, longer than
    /// [`MAX_LENGTH`] bytes, or ends with a NUL character
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_vault::domain::Secret;
    ///
    /// let secret = Secret::new("a@b.com").unwrap();
    /// assert_eq!(secret.as_str(), "a@b.com");
    ///
    /// assert!(Secret::new("").is_err());
    /// assert!(Secret::new(&"x".repeat(65)).is_err());
    /// ```
    pub fn new(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::Encoding("secret is empty".to_string()));
        }
        if value.len() > MAX_LENGTH {
            return Err(Error::Encoding(format!(
                "secret is {} bytes, maximum is {MAX_LENGTH}",
                value.len()
            )));
        }
        if value.ends_with('\0') {
            return Err(Error::Encoding(
                "secret must not end with a NUL character".to_string(),
            ));
        }
        Ok(Self(Zeroizing::new(value.to_string())))
    }

    /// Gets the secret as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Gets the UTF-8 bytes of the secret
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret(<{} bytes>)", self.0.len())
    }
}
