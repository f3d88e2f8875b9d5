use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::{Holding, PriceEntry};

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct HoldingMetrics {
    current_value: Decimal,
    invested_value: Decimal,
    pnl: Decimal,
    /// `None` when nothing was invested and the ratio has no value.
    pnl_percent: Option<Decimal>,
}

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct HoldingRow {
    holding: Holding,
    price: PriceEntry,
    metrics: HoldingMetrics,
}
