//! Error types for the auction.

use std::fmt;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the auction.
///
/// Bid failures carry fixed messages; callers that only care about the
/// broad category should match on [`Error::kind`].
#[derive(Error, Debug)]
pub enum Error {
    /// Bidder name was not a string.
    #[error("Bidder name must be a non-empty string")]
    BidderNameType,

    /// Amount was not a (finite) number.
    #[error("Amount must be a number")]
    AmountType,

    /// Bid placed while the auction is stopped.
    #[error("Bidding not allowed now")]
    BiddingClosed,

    /// Bidder name was empty or blank.
    #[error("Missing bidder name")]
    MissingBidderName,

    /// Amount was zero or negative.
    #[error("Amount is invalid")]
    InvalidAmount,

    /// Amount does not exceed the best bid plus the minimum increment.
    #[error("Bid is too low")]
    BidTooLow,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::BidderNameType | Error::AmountType => ErrorKind::Type,
            Error::MissingBidderName | Error::InvalidAmount => ErrorKind::Value,
            Error::BiddingClosed | Error::BidTooLow => ErrorKind::Auction,
            Error::Config(_) | Error::Io(_) | Error::Json(_) => ErrorKind::Config,
        }
    }
}

/// Error category reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Argument of the wrong type.
    Type,
    /// Argument of the right type but an unusable value.
    Value,
    /// Auction rule violated.
    Auction,
    /// Configuration could not be loaded or is invalid.
    Config,
}

impl ErrorKind {
    /// Name printed in front of error messages.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::Type => "TypeError",
            ErrorKind::Value => "ValueError",
            ErrorKind::Auction => "AuctionError",
            ErrorKind::Config => "ConfigError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_error_messages() {
        assert_eq!(
            Error::BidderNameType.to_string(),
            "Bidder name must be a non-empty string"
        );
        assert_eq!(Error::AmountType.to_string(), "Amount must be a number");
        assert_eq!(Error::BiddingClosed.to_string(), "Bidding not allowed now");
        assert_eq!(Error::MissingBidderName.to_string(), "Missing bidder name");
        assert_eq!(Error::InvalidAmount.to_string(), "Amount is invalid");
        assert_eq!(Error::BidTooLow.to_string(), "Bid is too low");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Error::BidderNameType.kind(), ErrorKind::Type);
        assert_eq!(Error::AmountType.kind(), ErrorKind::Type);
        assert_eq!(Error::MissingBidderName.kind(), ErrorKind::Value);
        assert_eq!(Error::InvalidAmount.kind(), ErrorKind::Value);
        assert_eq!(Error::BiddingClosed.kind(), ErrorKind::Auction);
        assert_eq!(Error::BidTooLow.kind(), ErrorKind::Auction);
        assert_eq!(Error::config("bad").kind(), ErrorKind::Config);
    }

    #[test]
    fn test_kind_prefix() {
        let err = Error::BidTooLow;
        assert_eq!(
            format!("{}: {}", err.kind(), err),
            "AuctionError: Bid is too low"
        );
    }
}
