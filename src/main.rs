use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crypto_portfolio_tui::{
    api::{FilePriceSource, MockPriceSource, PriceSource, RandomWalkHistory},
    app::{App, HistorySettings, Portfolio},
    config::{Args, Config},
    logging::init_logging,
};

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::load(Args::parse())?;
    init_logging(&config)?;
    info!(?config, "Starting crypto portfolio tracker");

    let prices = match &config.price_file {
        Some(path) => FilePriceSource::new(path).load(),
        None => MockPriceSource.load(),
    }
    .context("Failed to load prices")?;

    let history = RandomWalkHistory::from_seed(config.seed);
    let portfolio = Portfolio::new(
        prices,
        Box::new(history),
        HistorySettings {
            base_price: config.base_price,
            days: config.history_days,
        },
    );

    let mut app = App::new(portfolio);
    app.run()?;

    Ok(())
}
