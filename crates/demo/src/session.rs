//! A scripted auction with random bidders and an optional human player.
//!
//! Every bid is echoed as a call trace (`>>> bid( "Trump", 120)`) and any
//! rejection is printed as `<ErrorKind>: <message>`, so the transcript reads
//! like an interactive session with the auction.

use crate::config::DemoConfig;
use anyhow::Result;
use auction_core::{normalize_name, Amount, Auction, Standing};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Name used for the human player.
pub const HUMAN_BIDDER: &str = "You";

/// One run of the demo auction.
pub struct DemoSession<R, W, G> {
    config: DemoConfig,
    auction: Auction,
    input: R,
    output: W,
    rng: G,
    /// Prompt the human for bids and wait for ENTER between phases.
    interactive: bool,
}

impl<R: BufRead, W: Write, G: Rng> DemoSession<R, W, G> {
    pub fn new(config: DemoConfig, input: R, output: W, rng: G, interactive: bool) -> Self {
        let auction = Auction::from_config(&config.auction);
        Self {
            config,
            auction,
            input,
            output,
            rng,
            interactive,
        }
    }

    pub fn auction(&self) -> &Auction {
        &self.auction
    }

    /// Run the auction to completion and return the winning bid.
    pub fn run(&mut self) -> Result<Standing> {
        writeln!(self.output, ">>> auction = {}", self.auction.repr())?;
        writeln!(self.output, ">>> auction.start()")?;
        self.auction.start();
        self.pause("Press ENTER to start bidding...")?;

        let mut amount: Amount = 0.0;
        for n in 0..self.config.max_bids {
            let bidder = if self.is_human_turn(n) {
                amount = self.read_human_bid()?;
                HUMAN_BIDDER.to_string()
            } else {
                let (bidder, next) = self.random_bid(n, amount);
                amount = next;
                bidder
            };
            self.print_and_bid(&bidder, amount)?;
        }

        writeln!(self.output)?;
        writeln!(self.output, "The bidding has ENDED.")?;
        self.pause("Who won?  Press ENTER to see who won... ")?;
        writeln!(self.output)?;
        writeln!(self.output, ">>> auction.winner()")?;
        writeln!(self.output, "{}", self.auction.winner())?;
        writeln!(self.output, ">>> auction.best_bid()")?;
        writeln!(self.output, "{}", self.auction.best_bid())?;
        self.output.flush()?;

        let outcome = Standing::new(self.auction.winner(), self.auction.best_bid());
        info!(winner = %outcome.bidder, best_bid = outcome.amount, "auction ended");
        Ok(outcome)
    }

    fn is_human_turn(&self, n: u32) -> bool {
        let every = self.config.human_turn_every;
        self.interactive && every != 0 && n % every == every - 1
    }

    fn read_human_bid(&mut self) -> Result<Amount> {
        let reply = self.prompt("Your turn.  How much do you bid? ")?;
        match reply.parse::<Amount>() {
            Ok(amount) if amount.is_finite() => Ok(amount),
            _ => {
                let amount = self.auction.best_bid() + 1.0;
                writeln!(
                    self.output,
                    "{} is not a valid number. You bid {}.",
                    reply, amount
                )?;
                Ok(amount)
            }
        }
    }

    /// Pick a bidder other than the current leader and raise the last amount.
    fn random_bid(&mut self, n: u32, prev: Amount) -> (String, Amount) {
        let bidders = &self.config.bidders;
        let leader = self.auction.winner();
        let last = bidders
            .iter()
            .position(|b| normalize_name(b) == leader)
            .unwrap_or(0);
        let next = (last + self.rng.gen_range(1..bidders.len())) % bidders.len();
        let bidder = bidders[next].clone();

        let raise = 20.0 * f64::from(self.rng.gen_range(1..=5u32));
        let mut amount = (prev - prev.rem_euclid(10.0) + raise).trunc();
        if n == 0 {
            // the opening bid always clears the increment
            amount = amount.max(self.auction.min_increment() + 10.0);
        }
        debug!(bidder = %bidder, amount, "random bid");
        (bidder, amount)
    }

    fn print_and_bid(&mut self, bidder: &str, amount: Amount) -> Result<()> {
        writeln!(self.output, ">>> bid( \"{}\", {})", bidder, amount)?;
        if let Err(err) = self.auction.bid(bidder, amount) {
            writeln!(self.output, "{}: {}", err.kind(), err)?;
        }
        Ok(())
    }

    fn pause(&mut self, prompt: &str) -> Result<()> {
        if self.interactive {
            self.prompt(prompt)?;
        }
        Ok(())
    }

    /// Print a prompt and read one line. End of input reads as empty.
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn session(
        config: DemoConfig,
        input: &str,
        interactive: bool,
    ) -> DemoSession<Cursor<Vec<u8>>, Vec<u8>, StdRng> {
        DemoSession::new(
            config,
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            StdRng::seed_from_u64(7),
            interactive,
        )
    }

    fn transcript(session: &DemoSession<Cursor<Vec<u8>>, Vec<u8>, StdRng>) -> String {
        String::from_utf8(session.output.clone()).unwrap()
    }

    #[test]
    fn test_auto_run_transcript() {
        let mut session = session(DemoConfig::default(), "", false);
        let outcome = session.run().unwrap();
        let out = transcript(&session);

        assert!(out.starts_with(
            ">>> auction = Auction('Vacation to Ko Samui', min_increment=50)\n>>> auction.start()\n"
        ));
        assert_eq!(out.matches(">>> bid( \"").count(), 13);
        assert!(!out.contains(HUMAN_BIDDER));
        assert!(out.contains("The bidding has ENDED."));
        assert!(out.ends_with(&format!(
            ">>> auction.winner()\n{}\n>>> auction.best_bid()\n{}\n",
            outcome.bidder, outcome.amount
        )));
        assert_eq!(outcome.bidder, session.auction().winner());
        assert_eq!(outcome.amount, session.auction().best_bid());
    }

    #[test]
    fn test_opening_bid_is_accepted() {
        let config = DemoConfig {
            max_bids: 1,
            ..Default::default()
        };
        let mut session = session(config, "", false);
        let outcome = session.run().unwrap();
        assert_eq!(session.auction().bidder_count(), 1);
        assert!(outcome.amount >= 60.0);
        assert!(!transcript(&session).contains("Error"));
    }

    #[test]
    fn test_invalid_human_input_bids_just_above_best() {
        let config = DemoConfig {
            max_bids: 4,
            ..Default::default()
        };
        let mut session = session(config, "\nabc\n\n", true);
        session.run().unwrap();
        let out = transcript(&session);

        assert!(out.contains("Press ENTER to start bidding..."));
        assert!(out.contains("Your turn.  How much do you bid? "));
        assert!(out.contains("abc is not a valid number. You bid "));
        // best + 1 never clears an increment of 50
        assert!(out.contains("AuctionError: Bid is too low"));
        assert_ne!(session.auction().winner(), HUMAN_BIDDER);
    }

    #[test]
    fn test_human_can_win() {
        let config = DemoConfig {
            max_bids: 4,
            ..Default::default()
        };
        let mut session = session(config, "\n100000\n\n", true);
        let outcome = session.run().unwrap();
        assert_eq!(outcome.bidder, HUMAN_BIDDER);
        assert_relative_eq!(outcome.amount, 100000.0);
        assert!(transcript(&session).contains(">>> bid( \"You\", 100000)"));
    }

    #[test]
    fn test_non_finite_human_input_bids_just_above_best() {
        for reply in ["nan", "inf", "-infinity"] {
            let config = DemoConfig {
                max_bids: 4,
                ..Default::default()
            };
            let mut session = session(config, &format!("\n{}\n\n", reply), true);
            session.run().unwrap();
            let out = transcript(&session);
            assert!(out.contains(&format!("{} is not a valid number. You bid ", reply)));
            assert!(!out.contains("TypeError"));
        }
    }

    #[test]
    fn test_negative_human_bid_reports_value_error() {
        let config = DemoConfig {
            max_bids: 4,
            ..Default::default()
        };
        let mut session = session(config, "\n-5\n\n", true);
        session.run().unwrap();
        assert!(transcript(&session).contains("ValueError: Amount is invalid"));
    }

    #[test]
    fn test_random_bidders_come_from_config() {
        let config = DemoConfig::default();
        let names = config.bidders.clone();
        let mut session = session(config, "", false);
        session.run().unwrap();
        for standing in session.auction().standings() {
            assert!(names.contains(&standing.bidder));
        }
    }
}
