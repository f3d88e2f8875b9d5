#![cfg(test)]

mod app;
mod history;
mod utils;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    api::{HistorySource, MockPriceSource, PriceSource},
    app::{HistorySettings, Portfolio},
    models::{HistoryPoint, Holding, PriceBook},
};

/// Deterministic history: a flat line at the base price.
pub struct FlatHistory;

impl HistorySource for FlatHistory {
    fn generate(&mut self, base_price: f64, days: u32, today: NaiveDate) -> Vec<HistoryPoint> {
        (0..=days)
            .rev()
            .map(|i| {
                HistoryPoint::new(
                    today - chrono::Duration::days(i64::from(i)),
                    base_price,
                    base_price * 0.5,
                )
            })
            .collect()
    }
}

pub fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

pub fn holding(id: u64, symbol: &str, amount: Decimal, purchase_price: Decimal) -> Holding {
    Holding::new(id, symbol.to_string(), amount, purchase_price, date())
}

pub fn mock_prices() -> PriceBook {
    MockPriceSource.load().unwrap()
}

pub fn mock_portfolio() -> Portfolio {
    Portfolio::new(
        mock_prices(),
        Box::new(FlatHistory),
        HistorySettings::default(),
    )
}
