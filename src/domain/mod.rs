//! Domain types for threshold secret sharing
//!
//! This module contains validated newtypes and configuration for splitting a secret:
//! - [`Threshold`] - Minimum shares required for reconstruction (1..=255)
//! - [`ShareCount`] - Total number of shares to create (1..=255)
//! - [`SplitConfig`] - Validated share count, threshold and x-coordinate strategy
//! - [`Secret`] - A bounded-length UTF-8 secret held in zeroizing memory
//! - [`Share`] and [`ShareSet`] - Points on the sharing polynomial

mod config;
mod secret;
mod share;
mod share_count;
mod threshold;

pub use config::{SplitConfig, XCoordinates};
pub use secret::{MAX_LENGTH, Secret};
pub use share::{Share, ShareSet};
pub use share_count::ShareCount;
pub use threshold::Threshold;
