//! Threshold secret sharing for short identifiers, with each share sealed to a custodian
//!
//! A secret of at most [`domain::MAX_LENGTH`] bytes is encoded as an element of the
//! prime field of order `2^521 - 1`, split with Shamir's scheme, and each share is
//! encrypted to one custodian's X25519 public key. Any quorum of custodians can
//! recover it; fewer learn nothing.
//!
//! See [`service`] for the entry points used by account workflows.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
#[cfg(feature = "cli")]
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod field;
pub mod polynomial;
pub mod reconstruct;
pub mod service;
pub mod splitter;
pub mod vault;

pub use error::{Error, Result};
pub use service::{
    is_reconstructable, reconstruct_from_quorum, split_and_distribute, split_and_distribute_with,
};
