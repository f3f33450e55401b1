//! Vault configuration file
//!
//! ```toml
//! threshold = 3                  # optional, defaults to a majority
//! x_coordinates = "sequential"   # or "random"
//!
//! [[custodians]]
//! contact = "alice@example.org"
//! public_key = "8f40c5adb68f25624ae5b214ea767a6ec94d829d3d7b5e1ad1ba6f3e2138285f"
//! ```

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::domain::XCoordinates;
use crate::vault::CustodianKey;

/// One `[[custodians]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodianEntry {
    pub contact: String,
    pub public_key: String,
}

impl From<&CustodianKey> for CustodianEntry {
    fn from(key: &CustodianKey) -> Self {
        Self {
            contact: key.contact().to_string(),
            public_key: key.to_hex(),
        }
    }
}

/// Split settings and the custodian list, loaded once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,
    #[serde(default)]
    pub x_coordinates: XCoordinates,
    #[serde(default)]
    pub custodians: Vec<CustodianEntry>,
}

impl VaultConfig {
    /// Read and parse a TOML config file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse a TOML config
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML")
    }

    /// Render the config as TOML
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Custodian public keys in file order
    ///
    /// # Errors
    /// Returns an error if there are no custodians or a public key is malformed
    pub fn custodian_keys(&self) -> Result<Vec<CustodianKey>> {
        if self.custodians.is_empty() {
            bail!("No custodians configured");
        }
        self.custodians
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                CustodianKey::from_hex(entry.contact.clone(), &entry.public_key).with_context(
                    || format!("Invalid public key for custodian #{} ({})", idx + 1, entry.contact),
                )
            })
            .collect()
    }
}
