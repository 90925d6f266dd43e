//! A full bidding session driven through the public API.

use approx::assert_relative_eq;
use auction_core::{Auction, Error, ErrorKind};

#[test]
fn test_bidding_session() {
    let mut auction = Auction::with_increment("Item", 1.0);
    assert_eq!(auction.repr(), "Auction('Item')");
    auction.start();

    auction.bid("Jim", 250.0).unwrap();
    assert_eq!(auction.best_bid(), 250.0);

    auction.bid("Harry", 300.0).unwrap();
    assert_eq!(auction.best_bid(), 300.0);

    auction.bid(" biRd ", 400.0).unwrap();
    assert_eq!(auction.best_bid(), 400.0);
    assert_eq!(auction.winner(), "Bird");

    let err = auction.bid("Jim", 400.1).unwrap_err();
    assert!(matches!(err, Error::BidTooLow));
    assert_eq!(err.kind(), ErrorKind::Auction);

    let err = auction.bid("", 1000.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    assert_eq!(err.to_string(), "Missing bidder name");

    assert!(auction.is_active());
    auction.stop();
    let err = auction.bid("Jim", 1000.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Auction);
    assert_eq!(err.to_string(), "Bidding not allowed now");

    auction.start();
    auction.bid("mai", 402.50).unwrap();
    assert_relative_eq!(auction.best_bid(), 402.5);
    assert_eq!(auction.winner(), "Mai");

    // one entry per bidder, in first-bid order
    let bidders: Vec<String> = auction.standings().map(|s| s.bidder).collect();
    assert_eq!(bidders, vec!["Jim", "Harry", "Bird", "Mai"]);
}

#[test]
fn test_rejections_do_not_disturb_the_leader() {
    let mut auction = Auction::with_increment("Item", 5.0);
    auction.start();
    auction.bid("Ann", 100.0).unwrap();

    for (bidder, amount) in [("Bob", 105.0), ("", 500.0), ("Bob", -1.0), ("Bob", f64::NAN)] {
        assert!(auction.bid(bidder, amount).is_err());
        assert_eq!(auction.best_bid(), 100.0);
        assert_eq!(auction.winner(), "Ann");
    }
    assert_eq!(auction.bidder_count(), 1);
}
