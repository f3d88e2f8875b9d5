use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use crate::api::MAX_HISTORY_DAYS;

pub const DEFAULT_LOG_FILE: &str = "crypto-portfolio.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_HISTORY_DAYS: u32 = 30;
pub const DEFAULT_BASE_PRICE: f64 = 50_000.0;

#[derive(Debug, Default, Parser)]
#[command(version, about = "A terminal-based crypto portfolio tracker")]
pub struct Args {
    /// JSON file with the static price table (built-in table if omitted)
    #[arg(short, long)]
    pub prices: Option<String>,

    /// Where log output goes; the terminal belongs to the UI
    #[arg(long)]
    pub log_file: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long)]
    pub log_level: Option<String>,

    /// Number of days shown in the portfolio value chart
    #[arg(long)]
    pub history_days: Option<u32>,

    /// Starting price of the mock history
    #[arg(long)]
    pub base_price: Option<f64>,

    /// Seed for the mock history, random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub price_file: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_level: String,
    pub history_days: u32,
    pub base_price: f64,
    pub seed: Option<u64>,
}

impl Config {
    /// Command line first, then environment, then defaults.
    pub fn load(args: Args) -> Result<Self> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    pub fn resolve<F>(args: Args, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let price_file = args
            .prices
            .or_else(|| env("CRYPTO_PORTFOLIO_PRICES"))
            .filter(|path| !path.trim().is_empty())
            .map(|path| expand_path(&path));

        let log_file = args
            .log_file
            .or_else(|| env("CRYPTO_PORTFOLIO_LOG_FILE"))
            .map(|path| expand_path(&path))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        let log_level = args
            .log_level
            .or_else(|| env("CRYPTO_PORTFOLIO_LOG_LEVEL"))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let history_days = match args.history_days {
            Some(days) => days,
            None => env("CRYPTO_PORTFOLIO_HISTORY_DAYS")
                .map(|value| {
                    value.trim().parse::<u32>().with_context(|| {
                        format!("Failed to parse CRYPTO_PORTFOLIO_HISTORY_DAYS '{}'", value)
                    })
                })
                .transpose()?
                .unwrap_or(DEFAULT_HISTORY_DAYS),
        };
        if history_days > MAX_HISTORY_DAYS {
            return Err(anyhow!(
                "History of {} days exceeds the limit of {} days",
                history_days,
                MAX_HISTORY_DAYS
            ));
        }

        let seed = match args.seed {
            Some(seed) => Some(seed),
            None => env("CRYPTO_PORTFOLIO_SEED")
                .map(|value| {
                    value.trim().parse::<u64>().with_context(|| {
                        format!("Failed to parse CRYPTO_PORTFOLIO_SEED '{}'", value)
                    })
                })
                .transpose()?,
        };

        Ok(Self {
            price_file,
            log_file,
            log_level,
            history_days,
            base_price: args.base_price.unwrap_or(DEFAULT_BASE_PRICE),
            seed,
        })
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
