//! `ShareCount` newtype for Shamir Secret Sharing

use crate::error::{Error, Result};

/// Number of shares to create (1..=255)
///
/// Each share is issued to one custodian, so this is also the custodian count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u8);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u8 = 1;

    /// Maximum valid share count
    pub const MAX: u8 = u8::MAX;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns [`Error::InvalidShareCount`] if count is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_vault::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN {
            return Err(Error::InvalidShareCount(
                "share count must be at least 1".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Share count from a collection length, e.g. a custodian list
    ///
    /// # Errors
    /// Returns [`Error::InvalidShareCount`] if `len` is 0 or above 255
    pub fn from_len(len: usize) -> Result<Self> {
        let value = u8::try_from(len).map_err(|_| {
            Error::InvalidShareCount(format!("at most {} shares supported, got {len}", Self::MAX))
        })?;
        Self::new(value)
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
