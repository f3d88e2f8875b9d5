use derive_getters::Getters;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PriceFileEntryDto {
    name: String,
    price: Decimal,
    #[serde(rename = "change24h", default)]
    change_24h: Decimal,
    #[serde(default)]
    icon: Option<String>,
}
