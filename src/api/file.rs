use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Error, Result};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use tracing::info;

use super::{PriceSource, dto::PriceFileEntryDto};
use crate::models::{PriceBook, PriceEntry};

/// Reads a static price table from a JSON object keyed by symbol:
///
/// ```json
/// { "BTC": { "name": "Bitcoin", "price": 43250, "change24h": 2.5, "icon": "₿" } }
/// ```
#[derive(Clone, Debug)]
pub struct FilePriceSource {
    path: PathBuf,
}

impl FilePriceSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PriceSource for FilePriceSource {
    fn load(&self) -> Result<PriceBook> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read price file {}", self.path.display()))?;
        let book = parse_price_book(&text)
            .with_context(|| format!("Invalid price file {}", self.path.display()))?;

        info!(path = %self.path.display(), symbols = book.len(), "Loaded price file");
        Ok(book)
    }
}

pub fn parse_price_book(text: &str) -> Result<PriceBook> {
    let data = serde_json::from_str::<Value>(text)?;
    let entries = match data {
        Value::Object(entries) => entries,
        _ => return Err(Error::msg("Unexpected price file format: not an object")),
    };

    to_price_book(entries)
}

fn to_price_book(entries: Map<String, Value>) -> Result<PriceBook> {
    let mut book = PriceBook::default();

    for (key, value) in entries {
        let symbol = key.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(Error::msg("Price entry with an empty symbol"));
        }

        let dto: PriceFileEntryDto = serde_json::from_value(value)
            .with_context(|| format!("Failed to parse price entry '{}'", key))?;

        if *dto.price() < Decimal::ZERO {
            return Err(Error::msg(format!(
                "Negative price {} for '{}'",
                dto.price(),
                symbol
            )));
        }

        let icon = dto
            .icon()
            .clone()
            .filter(|icon| !icon.is_empty())
            .unwrap_or_else(|| symbol.chars().take(1).collect());

        book.insert(PriceEntry::new(
            symbol,
            dto.name().to_string(),
            *dto.price(),
            *dto.change_24h(),
            icon,
        ));
    }

    Ok(book)
}
