//! Configuration validation for Shamir Secret Sharing splits

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::{ShareCount, Threshold};

/// How x-coordinates are chosen for issued shares
///
/// Both strategies produce pairwise-distinct, non-zero coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XCoordinates {
    /// `1..=n`
    #[default]
    Sequential,
    /// Uniform in `[1, P)`, resampled on collision
    Random,
}

/// Validated pair of threshold and share count
///
/// Enforces the invariant that threshold <= `share_count` at the type level.
/// This prevents creating configurations where more shares are required
/// than actually exist.
#[derive(Debug, Clone, Copy)]
pub struct SplitConfig {
    threshold: Threshold,
    share_count: ShareCount,
    x_coordinates: XCoordinates,
}

impl SplitConfig {
    /// Creates a new split configuration
    ///
    /// A missing threshold defaults to a simple majority of `share_count`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidThreshold`] if threshold exceeds share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_vault::domain::{ShareCount, SplitConfig, Threshold};
    ///
    /// let config = SplitConfig::new(
    ///     ShareCount::new(5).unwrap(),
    ///     Some(Threshold::new(3).unwrap()),
    /// ).unwrap();
    /// assert_eq!(*config.threshold(), 3);
    /// assert_eq!(*config.share_count(), 5);
    ///
    /// // Majority by default
    /// let config = SplitConfig::new(ShareCount::new(7).unwrap(), None).unwrap();
    /// assert_eq!(*config.threshold(), 4);
    ///
    /// // Invalid: threshold > share_count
    /// let result = SplitConfig::new(
    ///     ShareCount::new(3).unwrap(),
    ///     Some(Threshold::new(5).unwrap()),
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(share_count: ShareCount, threshold: Option<Threshold>) -> Result<Self> {
        let threshold = threshold.unwrap_or_else(|| Threshold::majority(share_count));
        if *threshold > *share_count {
            return Err(Error::InvalidThreshold(format!(
                "threshold {} cannot exceed share count {}, secret could not be recovered",
                *threshold, *share_count
            )));
        }
        Ok(Self {
            threshold,
            share_count,
            x_coordinates: XCoordinates::default(),
        })
    }

    /// Builds a configuration from raw counts, treating a zero threshold as "unspecified"
    ///
    /// # Errors
    /// Returns an error if `share_count` is 0 or `threshold` exceeds it
    pub fn from_counts(share_count: u8, threshold: u8) -> Result<Self> {
        let share_count = ShareCount::new(share_count)?;
        let threshold = match threshold {
            0 => None,
            k => Some(Threshold::new(k)?),
        };
        Self::new(share_count, threshold)
    }

    /// Selects the x-coordinate strategy
    #[must_use]
    pub fn with_x_coordinates(mut self, x_coordinates: XCoordinates) -> Self {
        self.x_coordinates = x_coordinates;
        self
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the share count value
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }

    /// Gets the x-coordinate strategy
    #[must_use]
    pub fn x_coordinates(&self) -> XCoordinates {
        self.x_coordinates
    }
}
