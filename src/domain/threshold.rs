//! Threshold newtype for Shamir Secret Sharing

use crate::error::{Error, Result};

use super::ShareCount;

/// Threshold for Shamir Secret Sharing (1..=255)
///
/// Invariant: threshold >= 1 (enforced at construction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns [`Error::InvalidThreshold`] if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_vault::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value == 0 {
            return Err(Error::InvalidThreshold(
                "threshold must be at least 1".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Threshold asked for by a caller, where 0 means "use the default"
    ///
    /// Returns `None` for 0 so that [`SplitConfig::new`](super::SplitConfig::new)
    /// falls back to a majority.
    #[must_use]
    pub fn requested(value: u8) -> Option<Self> {
        (value != 0).then_some(Self(value))
    }

    /// Simple majority of `share_count`: `n / 2 + 1`
    #[must_use]
    pub fn majority(share_count: ShareCount) -> Self {
        // n <= 255 so n / 2 + 1 <= 128
        Self(*share_count / 2 + 1)
    }
}

impl std::ops::Deref for Threshold {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
