use std::io;

use anyhow::Context;
use auctionhouse_auction::Auction;
use auctionhouse_cli::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    auctionhouse_observability::init(config.log_format);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let mut auction = Auction::new();
    tracing::info!("auction session started");

    let stdin = io::stdin();
    auctionhouse_cli::run(&mut auction, stdin.lock(), io::stdout(), &config.prompt)
        .context("auction session aborted")?;

    tracing::info!(products = auction.catalog().len(), "auction session ended");
    Ok(())
}
