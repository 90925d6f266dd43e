//! auction-demo - run a random auction on the console and place your own bids.

mod config;
mod session;

use anyhow::Context;
use clap::Parser;
use config::DemoConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use session::DemoSession;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "auction-demo")]
#[command(about = "Run a random auction on the console and place your own bids")]
struct Cli {
    /// JSON config file (defaults are used for missing fields)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the random bidders
    #[arg(long)]
    seed: Option<u64>,

    /// Number of bids before the auction ends
    #[arg(long)]
    max_bids: Option<u32>,

    /// Run without prompts; every bid is placed by a random bidder
    #[arg(long)]
    auto: bool,
}

fn main() -> anyhow::Result<()> {
    // keep traces off the transcript unless RUST_LOG asks for them
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DemoConfig::from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => DemoConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(max_bids) = cli.max_bids {
        config.max_bids = max_bids;
    }
    config.validate()?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = DemoSession::new(config, stdin.lock(), stdout.lock(), rng, !cli.auto);
    let outcome = session.run()?;
    info!(
        winner = %outcome.bidder,
        bidders = session.auction().bidder_count(),
        "demo finished"
    );

    Ok(())
}
