//! Configuration for the demo auction.

use auction_core::{AuctionConfig, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Demo settings. Every field has a default, so a config file only needs
/// the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Item and increment.
    pub auction: AuctionConfig,
    /// Number of bids placed before the auction ends.
    pub max_bids: u32,
    /// Simulated bidders.
    pub bidders: Vec<String>,
    /// Every n-th bid is placed by the human at the console.
    pub human_turn_every: u32,
    /// Seed for the random bidders (random if unset).
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            auction: AuctionConfig {
                name: "Vacation to Ko Samui".to_string(),
                min_increment: 50.0,
            },
            max_bids: 13,
            bidders: ["Prayut", "Taksin", "Trump", "Obama"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            human_turn_every: 4,
            seed: None,
        }
    }
}

impl DemoConfig {
    /// Load a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Check that the demo can run with these settings.
    pub fn validate(&self) -> Result<()> {
        self.auction.validate()?;
        if self.bidders.len() < 2 {
            return Err(Error::config("at least two bidders are required"));
        }
        if self.human_turn_every == 0 {
            return Err(Error::config("human_turn_every must be at least 1"));
        }
        Ok(())
    }
}
