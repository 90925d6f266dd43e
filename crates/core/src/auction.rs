//! The auction entity.
//!
//! An [`Auction`] sells a single item. Bids are only accepted while the
//! auction is active, and each new bid must beat the current best bid by
//! more than the minimum increment. Rejected bids never change state.

use crate::config::AuctionConfig;
use crate::error::{Error, Result};
use crate::normalize::{is_blank, normalize_name};
use crate::types::{Amount, Standing, DEFAULT_MIN_INCREMENT, NO_BIDS};
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// A single-item ascending auction.
#[derive(Debug, Clone)]
pub struct Auction {
    /// Description of the item.
    name: String,
    /// Amount a new bid must exceed the best bid by.
    min_increment: Amount,
    /// Whether bids are accepted.
    active: bool,
    /// Standing bid per normalized bidder name, in first-bid order.
    /// Always holds the `NO_BIDS -> 0` entry.
    bids: IndexMap<String, Amount>,
}

impl Auction {
    /// Create an inactive auction with the default increment of 1.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_increment(name, DEFAULT_MIN_INCREMENT)
    }

    /// Create an inactive auction with a custom minimum increment.
    pub fn with_increment(name: impl Into<String>, min_increment: Amount) -> Self {
        let mut bids = IndexMap::new();
        bids.insert(NO_BIDS.to_string(), 0.0);
        Self {
            name: name.into(),
            min_increment,
            active: false,
            bids,
        }
    }

    /// Create an inactive auction from configuration.
    pub fn from_config(config: &AuctionConfig) -> Self {
        Self::with_increment(config.name.clone(), config.min_increment)
    }

    /// Normalize a bidder name the way bids are keyed.
    pub fn normalize(name: &str) -> String {
        normalize_name(name)
    }

    /// Item description.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum amount a new bid must exceed the best bid by.
    pub fn min_increment(&self) -> Amount {
        self.min_increment
    }

    /// Enable bidding.
    pub fn start(&mut self) {
        self.active = true;
        debug!(auction = %self.name, "bidding enabled");
    }

    /// Disable bidding.
    pub fn stop(&mut self) {
        self.active = false;
        debug!(auction = %self.name, "bidding disabled");
    }

    /// Whether bids are currently accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Submit a bid.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// non-finite amount, auction stopped, blank name, non-positive amount,
    /// amount not above `best_bid() + min_increment`. On success the
    /// bidder's standing bid is replaced by `amount`.
    pub fn bid(&mut self, bidder_name: &str, amount: Amount) -> Result<()> {
        if let Err(err) = self.check_bid(bidder_name, amount) {
            debug!(
                auction = %self.name,
                bidder = bidder_name,
                amount,
                error = %err,
                "bid rejected"
            );
            return Err(err);
        }

        let bidder = normalize_name(bidder_name);
        debug!(auction = %self.name, bidder = %bidder, amount, "bid accepted");
        self.bids.insert(bidder, amount);
        Ok(())
    }

    /// Submit a bid whose arguments have not been type checked.
    ///
    /// The bidder must be a JSON string and the amount a JSON number;
    /// anything else fails with a type error before any other check.
    pub fn bid_value(&mut self, bidder_name: &Value, amount: &Value) -> Result<()> {
        let bidder_name = bidder_name.as_str().ok_or(Error::BidderNameType)?;
        let amount = amount.as_f64().ok_or(Error::AmountType)?;
        self.bid(bidder_name, amount)
    }

    fn check_bid(&self, bidder_name: &str, amount: Amount) -> Result<()> {
        if !amount.is_finite() {
            return Err(Error::AmountType);
        }
        if !self.active {
            return Err(Error::BiddingClosed);
        }
        if is_blank(bidder_name) {
            return Err(Error::MissingBidderName);
        }
        if amount <= 0.0 {
            return Err(Error::InvalidAmount);
        }
        // strict: a bid of exactly best + increment is too low
        if amount <= self.best_bid() + self.min_increment {
            return Err(Error::BidTooLow);
        }
        Ok(())
    }

    /// Highest standing bid, or 0 if nobody has bid.
    pub fn best_bid(&self) -> Amount {
        self.bids
            .values()
            .copied()
            .map(OrderedFloat)
            .max()
            .map_or(0.0, OrderedFloat::into_inner)
    }

    /// Name of the bidder holding the best bid, or `"no bids"`.
    ///
    /// Ties go to whoever placed their first bid earliest.
    pub fn winner(&self) -> &str {
        let best = self.best_bid();
        self.bids
            .iter()
            .find(|&(_, &amount)| amount == best)
            .map_or(NO_BIDS, |(bidder, _)| bidder.as_str())
    }

    /// Standing bids of real bidders, in the order they first bid.
    pub fn standings(&self) -> impl Iterator<Item = Standing> + '_ {
        self.bids
            .iter()
            .filter(|(bidder, _)| bidder.as_str() != NO_BIDS)
            .map(|(bidder, &amount)| Standing::new(bidder.clone(), amount))
    }

    /// Number of distinct bidders with a standing bid.
    pub fn bidder_count(&self) -> usize {
        self.bids.len() - 1
    }

    /// Constructor-style description, e.g. `Auction('Lamp', min_increment=5)`.
    pub fn repr(&self) -> String {
        if self.min_increment == DEFAULT_MIN_INCREMENT {
            format!("Auction('{}')", self.name)
        } else {
            format!(
                "Auction('{}', min_increment={})",
                self.name, self.min_increment
            )
        }
    }
}

impl fmt::Display for Auction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Auction for {}", self.name)
    }
}
