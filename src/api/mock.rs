use anyhow::Result;
use rust_decimal_macros::dec;

use super::PriceSource;
use crate::models::{PriceBook, PriceEntry};

/// Built-in price table used when no price file is configured.
#[derive(Clone, Debug, Default)]
pub struct MockPriceSource;

impl PriceSource for MockPriceSource {
    fn load(&self) -> Result<PriceBook> {
        let entry = |symbol: &str, name: &str, price, change_24h, icon: &str| {
            PriceEntry::new(
                symbol.to_string(),
                name.to_string(),
                price,
                change_24h,
                icon.to_string(),
            )
        };

        Ok(PriceBook::new(vec![
            entry("BTC", "Bitcoin", dec!(43250), dec!(2.5), "₿"),
            entry("ETH", "Ethereum", dec!(2580), dec!(-1.2), "Ξ"),
            entry("ADA", "Cardano", dec!(0.48), dec!(3.1), "₳"),
            entry("DOT", "Polkadot", dec!(7.25), dec!(-0.8), "●"),
            entry("LINK", "Chainlink", dec!(15.8), dec!(4.2), "⬡"),
        ]))
    }
}
