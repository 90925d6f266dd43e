//! Configuration structures for the auction.

use crate::error::{Error, Result};
use crate::types::{Amount, DEFAULT_MIN_INCREMENT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings used to construct an [`Auction`](crate::Auction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuctionConfig {
    /// Description of the item being auctioned.
    pub name: String,
    /// Amount a new bid must exceed the best bid by.
    pub min_increment: Amount,
}

impl Default for AuctionConfig {
    fn default() -> Self {
        Self {
            name: "Auction".to_string(),
            min_increment: DEFAULT_MIN_INCREMENT,
        }
    }
}

impl AuctionConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check that the increment is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.min_increment.is_finite() {
            return Err(Error::config(format!(
                "min_increment must be finite, got {}",
                self.min_increment
            )));
        }
        if self.min_increment < 0.0 {
            return Err(Error::config(format!(
                "min_increment must not be negative, got {}",
                self.min_increment
            )));
        }
        Ok(())
    }
}
