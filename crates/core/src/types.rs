//! Core data types for the auction.

use serde::{Deserialize, Serialize};

/// Bid amount. Integral and fractional amounts share one representation.
pub type Amount = f64;

/// Increment used when none is given at construction.
pub const DEFAULT_MIN_INCREMENT: Amount = 1.0;

/// Key of the placeholder entry present in every auction's bid table.
pub const NO_BIDS: &str = "no bids";

/// A bidder's current standing bid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// Normalized bidder name.
    pub bidder: String,
    /// Most recent accepted amount.
    pub amount: Amount,
}

impl Standing {
    /// Create a standing bid.
    pub fn new(bidder: impl Into<String>, amount: Amount) -> Self {
        Self {
            bidder: bidder.into(),
            amount,
        }
    }
}
