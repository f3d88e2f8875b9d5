use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct DistributionEntry {
    symbol: String,
    value: Decimal,
    percentage: Decimal,
}
